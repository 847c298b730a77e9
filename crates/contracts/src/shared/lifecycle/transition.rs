use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::actions::{ActionKind, ActionResolver, ActionSeverity, LifecycleAction};
use super::definition::{CodedVariant, LifecycleDefinition};
use super::record::{AuditNote, ChecklistEntry, LifecycleRecord};

/// Строка таблицы переходов вида
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule<S, C> {
    pub from: S,
    pub action: &'static str,
    pub label: &'static str,
    pub severity: ActionSeverity,
    pub to: S,
    /// Пункт чек-листа, который отмечается выполненным при переходе
    pub completes: Option<C>,
    pub requires_note: bool,
    /// Переход в ветку вне основной последовательности (отмена, продление, отказ)
    pub branch: bool,
}

impl<S, C> TransitionRule<S, C> {
    /// Обычный шаг вперёд по основной последовательности
    pub const fn forward(
        from: S,
        action: &'static str,
        label: &'static str,
        to: S,
        completes: Option<C>,
    ) -> Self {
        Self {
            from,
            action,
            label,
            severity: ActionSeverity::Positive,
            to,
            completes,
            requires_note: false,
            branch: false,
        }
    }

    /// Переход в ветку или из неё
    pub const fn branch(
        from: S,
        action: &'static str,
        label: &'static str,
        severity: ActionSeverity,
        to: S,
        requires_note: bool,
    ) -> Self {
        Self {
            from,
            action,
            label,
            severity,
            to,
            completes: None,
            requires_note,
            branch: true,
        }
    }

    pub fn to_action(&self) -> LifecycleAction {
        LifecycleAction {
            id: self.action,
            label: self.label,
            severity: self.severity,
            requires_note: self.requires_note,
            kind: ActionKind::Forward,
        }
    }
}

// ============================================================================
// Проверка и применение действия
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Action '{action}' is not available in stage '{stage}'")]
    NotPermitted { action: String, stage: String },
    #[error("Please provide a reason for '{action}'")]
    NoteRequired { action: String },
}

/// Проверенное действие, готовое к применению
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPlan<D: LifecycleDefinition> {
    pub action: LifecycleAction,
    /// Новая стадия; `None` для действий, не меняющих стадию
    pub next_stage: Option<D::Stage>,
    pub completes: Option<D::Checklist>,
}

/// Проверить, что действие допустимо для текущей стадии записи
pub fn plan_action<D: LifecycleDefinition>(
    record: &LifecycleRecord<D>,
    action_id: &str,
    note: Option<&str>,
) -> Result<ActionPlan<D>, TransitionError> {
    let action = ActionResolver::<D>::find(record, action_id).ok_or_else(|| {
        TransitionError::NotPermitted {
            action: action_id.to_string(),
            stage: record.current_stage.code().to_string(),
        }
    })?;

    if action.requires_note && note.map(str::trim).unwrap_or_default().is_empty() {
        return Err(TransitionError::NoteRequired {
            action: action.label.to_string(),
        });
    }

    let rule = match action.kind {
        ActionKind::Forward => D::transitions()
            .iter()
            .find(|rule| rule.from == record.current_stage && rule.action == action_id),
        _ => None,
    };

    Ok(ActionPlan {
        action,
        next_stage: rule.map(|r| r.to),
        completes: rule.and_then(|r| r.completes),
    })
}

/// Построить следующую версию записи по проверенному действию.
///
/// Отмечает пункт чек-листа, меняет стадию, дописывает запись журнала
/// и увеличивает версию.
pub fn apply_plan<D: LifecycleDefinition>(
    record: &LifecycleRecord<D>,
    plan: &ActionPlan<D>,
    author: &str,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> LifecycleRecord<D> {
    let mut next = record.clone();
    let from = record.current_stage;

    if let Some(item) = plan.completes {
        let assignee = next
            .stage_flags
            .get(&item)
            .and_then(|entry| entry.assignee.clone());
        next.stage_flags.insert(
            item,
            ChecklistEntry {
                assignee,
                ..ChecklistEntry::done(now)
            },
        );
    }

    if let Some(stage) = plan.next_stage {
        next.current_stage = stage;
    }

    let content = note
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| plan.action.label.to_string());

    next.notes.push(AuditNote {
        id: Uuid::new_v4().to_string(),
        author: author.to_string(),
        content,
        timestamp: now,
        action: Some(plan.action.id.to_string()),
        from_stage: plan.next_stage.map(|_| from.code().to_string()),
        to_stage: plan.next_stage.map(|s| s.code().to_string()),
        details: Default::default(),
    });

    next.metadata.touch(now);
    next
}
