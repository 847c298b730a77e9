use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::definition::{CodedVariant, LifecycleDefinition};
use super::record::LifecycleRecord;

/// Оттенок кнопки действия. Только для отображения, на логику не влияет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionSeverity {
    Positive,
    Neutral,
    Negative,
}

impl ActionSeverity {
    /// CSS-модификатор кнопки
    pub fn button_class(&self) -> &'static str {
        match self {
            ActionSeverity::Positive => "button button--primary",
            ActionSeverity::Neutral => "button button--secondary",
            ActionSeverity::Negative => "button button--danger",
        }
    }
}

/// Происхождение действия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Переход по таблице переходов
    Forward,
    /// Доступно только при определённых атрибутах записи
    Conditional,
    /// Доступно всегда, стадию не меняет
    Auxiliary,
}

/// Действие, предлагаемое пользователю для записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleAction {
    pub id: &'static str,
    pub label: &'static str,
    pub severity: ActionSeverity,
    pub requires_note: bool,
    pub kind: ActionKind,
}

impl LifecycleAction {
    pub const fn conditional(id: &'static str, label: &'static str, severity: ActionSeverity) -> Self {
        Self {
            id,
            label,
            severity,
            requires_note: false,
            kind: ActionKind::Conditional,
        }
    }
}

/// Вспомогательное действие вида (константная таблица)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryAction {
    pub id: &'static str,
    pub label: &'static str,
    pub severity: ActionSeverity,
    pub requires_note: bool,
}

impl AuxiliaryAction {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            severity: ActionSeverity::Neutral,
            requires_note: false,
        }
    }

    pub const fn with_note(self) -> Self {
        Self {
            requires_note: true,
            ..self
        }
    }

    pub fn to_action(&self) -> LifecycleAction {
        LifecycleAction {
            id: self.id,
            label: self.label,
            severity: self.severity,
            requires_note: self.requires_note,
            kind: ActionKind::Auxiliary,
        }
    }
}

/// Общие вспомогательные действия для процессов с чек-листом
pub const ADD_NOTE: AuxiliaryAction = AuxiliaryAction::new("add_note", "Add Note").with_note();
pub const GENERATE_REPORT: AuxiliaryAction = AuxiliaryAction::new("generate_report", "Generate Report");

// ============================================================================
// Резолвер действий
// ============================================================================

/// Набор действий, доступных для записи в заданной стадии
pub struct ActionResolver<D>(PhantomData<D>);

impl<D: LifecycleDefinition> ActionResolver<D> {
    /// Прямые, затем условные, затем вспомогательные действия
    pub fn actions_for(stage: D::Stage, record: &LifecycleRecord<D>) -> Vec<LifecycleAction> {
        let mut actions: Vec<LifecycleAction> = D::transitions()
            .iter()
            .filter(|rule| rule.from == stage)
            .map(|rule| rule.to_action())
            .collect();
        actions.extend(D::conditional_actions(stage, record));
        actions.extend(Self::auxiliary());
        actions
    }

    /// То же по коду стадии. Неизвестная стадия получает только вспомогательные действия.
    pub fn actions_for_code(code: &str, record: &LifecycleRecord<D>) -> Vec<LifecycleAction> {
        match D::Stage::from_code(code) {
            Some(stage) => Self::actions_for(stage, record),
            None => Self::auxiliary(),
        }
    }

    /// Действия для текущей стадии записи
    pub fn actions_for_record(record: &LifecycleRecord<D>) -> Vec<LifecycleAction> {
        Self::actions_for(record.current_stage, record)
    }

    pub fn find(record: &LifecycleRecord<D>, action_id: &str) -> Option<LifecycleAction> {
        Self::actions_for_record(record)
            .into_iter()
            .find(|action| action.id == action_id)
    }

    fn auxiliary() -> Vec<LifecycleAction> {
        D::auxiliary_actions()
            .iter()
            .map(AuxiliaryAction::to_action)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee_closure::{ClosedEmployee, ClosureStage, EmployeeClosure};
    use crate::domain::a002_intern_termination::{InternTermination, TerminatingIntern};
    use crate::domain::a003_intern_completion::{CompletingIntern, CompletionStage, InternCompletion};
    use crate::domain::a005_early_completion::{EarlyCompletion, EarlyCompletionRequest, RequestStage};

    fn assert_total<D: LifecycleDefinition>(record: &LifecycleRecord<D>) {
        for stage in D::Stage::all() {
            let actions = ActionResolver::<D>::actions_for(*stage, record);
            assert!(!actions.is_empty(), "{} has no actions in {:?}", D::full_name(), stage);
        }
    }

    #[test]
    fn test_every_catalogued_stage_has_actions() {
        assert_total(&ClosedEmployee::new("1", "CLS-1", Default::default()));
        assert_total(&TerminatingIntern::new("1", "TRM-1", Default::default()));
        assert_total(&CompletingIntern::new("1", "CMP-1", Default::default()));
        assert_total(&EarlyCompletionRequest::new("1", "ECR-1", Default::default()));
    }

    #[test]
    fn test_forward_action_comes_first() {
        let record = ClosedEmployee::new("1", "CLS-1", Default::default());
        let actions = ActionResolver::<EmployeeClosure>::actions_for(ClosureStage::FinalSettlement, &record);
        let ids: Vec<_> = actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["schedule_exit_interview", "add_note", "generate_report"]);
        assert_eq!(actions[0].kind, ActionKind::Forward);
        assert_eq!(actions[0].severity, ActionSeverity::Positive);
    }

    #[test]
    fn test_unknown_stage_gets_auxiliary_only() {
        let record = TerminatingIntern::new("1", "TRM-1", Default::default());
        let actions = ActionResolver::<InternTermination>::actions_for_code("on_hold", &record);
        let ids: Vec<_> = actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["add_note", "generate_report"]);
        assert!(actions.iter().all(|a| a.kind == ActionKind::Auxiliary));
    }

    #[test]
    fn test_known_code_matches_typed_lookup() {
        let record = CompletingIntern::new("1", "CMP-1", Default::default());
        assert_eq!(
            ActionResolver::<InternCompletion>::actions_for_code("project_review", &record),
            ActionResolver::<InternCompletion>::actions_for(CompletionStage::ProjectReview, &record)
        );
    }

    #[test]
    fn test_pending_request_offers_review_and_decisions() {
        let record = EarlyCompletionRequest::new("1", "ECR-1", Default::default());
        let actions = ActionResolver::<EarlyCompletion>::actions_for(RequestStage::Pending, &record);
        let ids: Vec<_> = actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["start_review", "approve", "reject", "add_note"]);
        assert!(actions[2].requires_note);
        assert_eq!(
            ActionResolver::<InternTermination>::find(
                &TerminatingIntern::new("1", "TRM-1", Default::default()),
                "add_note"
            )
            .map(|a| a.requires_note),
            Some(true)
        );
    }
}
