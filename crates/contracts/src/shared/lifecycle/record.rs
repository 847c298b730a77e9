use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::definition::{CodedVariant, LifecycleDefinition};
use crate::domain::common::EntityMetadata;

// ============================================================================
// Составные части записи
// ============================================================================

/// Описание человека, которого касается процесс. Только для отображения.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Должность / позиция стажировки
    pub role: String,
    pub department: String,
    /// Университет или подразделение компании
    pub organization: String,
    /// Табельный номер / внешний идентификатор
    pub external_id: String,
}

impl SubjectInfo {
    /// Поля, по которым ищет строка поиска
    pub fn search_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.email,
            &self.role,
            &self.department,
            &self.external_id,
        ]
    }
}

/// Отметка выполнения пункта чек-листа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl ChecklistEntry {
    pub fn done(at: DateTime<Utc>) -> Self {
        Self {
            completed: true,
            completed_date: Some(at),
            assignee: None,
        }
    }
}

/// Причина входа в процесс. Задаётся при создании и дальше не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonInfo<R> {
    pub category: R,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiated_by: Option<String>,
    #[serde(default)]
    pub details: String,
}

/// Запись журнала. Журнал только дополняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditNote {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_stage: Option<String>,
    /// Дополнительные поля запроса действия (`rating`, `feedback`, ...)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

// ============================================================================
// Запись жизненного цикла
// ============================================================================

/// Запись жизненного цикла — единица работы.
///
/// Всё, кроме `id` и `currentStage`, имеет значение по умолчанию: если сервер
/// не прислал поле, после замены записи оно будет пустым, а не унаследованным.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct LifecycleRecord<D: LifecycleDefinition> {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub subject: SubjectInfo,
    pub current_stage: D::Stage,
    #[serde(default)]
    pub stage_flags: BTreeMap<D::Checklist, ChecklistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonInfo<D::Reason>>,
    #[serde(default)]
    pub attributes: D::Attributes,
    #[serde(default)]
    pub notes: Vec<AuditNote>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl<D: LifecycleDefinition> LifecycleRecord<D> {
    /// Новая запись в начальной стадии с пустым чек-листом
    pub fn new(id: impl Into<String>, code: impl Into<String>, subject: SubjectInfo) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            subject,
            current_stage: D::initial_stage(),
            stage_flags: BTreeMap::new(),
            reason: None,
            attributes: D::Attributes::default(),
            notes: Vec::new(),
            metadata: EntityMetadata::new(),
        }
    }

    /// Выполнен ли пункт чек-листа (отсутствующий пункт считается невыполненным)
    pub fn is_item_completed(&self, item: D::Checklist) -> bool {
        self.stage_flags
            .get(&item)
            .map(|entry| entry.completed)
            .unwrap_or(false)
    }

    /// Код текущей стадии
    pub fn stage_code(&self) -> &'static str {
        self.current_stage.code()
    }

    /// Проверка строки поиска (без учёта регистра) по описанию субъекта и коду
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.code.to_lowercase().contains(&query)
            || self
                .subject
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_intern_termination::{
        InternTermination, TerminationChecklist as C, TerminationReason, TerminationStage as S,
    };

    #[test]
    fn test_partial_document_fills_defaults() {
        let json = r#"{
            "id": "t-9",
            "currentStage": "exit_interview",
            "stageFlags": { "finalSettlement": { "completed": true } }
        }"#;
        let record: LifecycleRecord<InternTermination> = serde_json::from_str(json).unwrap();
        assert_eq!(record.current_stage, S::ExitInterview);
        assert!(record.is_item_completed(C::FinalSettlement));
        assert!(!record.is_item_completed(C::LegalClearance));
        assert!(record.notes.is_empty());
        assert!(record.reason.is_none());
        assert_eq!(record.metadata.version, 0);
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        let json = r#"{ "id": "t-9", "currentStage": "on_hold" }"#;
        assert!(serde_json::from_str::<LifecycleRecord<InternTermination>>(json).is_err());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let mut record = LifecycleRecord::<InternTermination>::new(
            "t-1",
            "TRM-0001",
            SubjectInfo {
                name: "Dana Park".to_string(),
                ..Default::default()
            },
        );
        record.reason = Some(ReasonInfo {
            category: TerminationReason::PolicyViolation,
            initiated_by: Some("company".to_string()),
            details: String::new(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["currentStage"], "initiated");
        assert_eq!(value["reason"]["category"], "policy_violation");
        assert_eq!(value["subject"]["name"], "Dana Park");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn test_search_matches_subject_and_code() {
        let record = LifecycleRecord::<InternTermination>::new(
            "t-1",
            "TRM-0001",
            SubjectInfo {
                name: "Dana Park".to_string(),
                department: "Engineering".to_string(),
                ..Default::default()
            },
        );
        assert!(record.matches_search("park"));
        assert!(record.matches_search("trm-0001"));
        assert!(record.matches_search("  "));
        assert!(!record.matches_search("marketing"));
    }
}
