use chrono::Utc;
use contracts::shared::lifecycle::{
    apply_plan, plan_action, ActionRequest, LifecycleDefinition, LifecycleRecord, TransitionError,
};
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository;
use super::seed::DemoData;

/// Ошибки сервиса. Всё, кроме `Storage`, уходит клиенту как `success: false`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{element} '{id}' not found")]
    NotFound { element: &'static str, id: String },
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Record was modified by another request, reload and try again")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// Ошибка инфраструктуры (не ошибка запроса клиента)
    pub fn is_storage(&self) -> bool {
        matches!(self, ServiceError::Storage(_))
    }
}

/// Все записи вида, упорядоченные по коду
pub async fn list<D: LifecycleDefinition>(
    db: &DatabaseConnection,
) -> Result<Vec<LifecycleRecord<D>>, ServiceError> {
    Ok(repository::list_all::<D>(db).await?)
}

pub async fn get<D: LifecycleDefinition>(
    db: &DatabaseConnection,
    id: &str,
) -> Result<LifecycleRecord<D>, ServiceError> {
    repository::get_by_id::<D>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            element: D::element_name(),
            id: id.to_string(),
        })
}

/// Выполнить действие над записью и вернуть её полную новую версию.
///
/// Действие проверяется по таблице переходов той же функцией, что и на клиенте.
/// Запись сохраняется только если её версия не изменилась с момента чтения.
pub async fn apply<D: LifecycleDefinition>(
    db: &DatabaseConnection,
    id: &str,
    request: &ActionRequest,
    author: &str,
) -> Result<LifecycleRecord<D>, ServiceError> {
    let current = get::<D>(db, id).await?;
    let plan = plan_action(&current, &request.action, request.notes_str())?;
    let mut next = apply_plan(&current, &plan, author, request.notes_str(), Utc::now());
    if let Some(note) = next.notes.last_mut() {
        note.details = request.extra.clone();
    }

    if !repository::update_if_version(db, &next, current.metadata.version).await? {
        return Err(ServiceError::Conflict);
    }

    tracing::info!(
        "{} {}: '{}' by {} ({} -> {})",
        D::full_name(),
        id,
        request.action,
        author,
        current.stage_code(),
        next.stage_code()
    );
    Ok(next)
}

/// Заполнить коллекцию демо-данными, если она пуста. Возвращает число вставленных записей.
pub async fn insert_test_data<D: DemoData>(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    if repository::count::<D>(db).await? > 0 {
        return Ok(0);
    }
    let records = D::demo_records(Utc::now());
    for record in &records {
        repository::insert(db, record).await?;
    }
    tracing::info!("{}: inserted {} demo records", D::full_name(), records.len());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use contracts::domain::a002_intern_termination::{
        InternTermination, TerminatingIntern, TerminationChecklist as C, TerminationStage as S,
    };
    use contracts::domain::a005_early_completion::EarlyCompletion;
    use contracts::shared::lifecycle::{ChecklistEntry, ChecklistProgress, SubjectInfo};

    async fn memory_db() -> DatabaseConnection {
        db::connect("sqlite::memory:", Some(1)).await.unwrap()
    }

    fn intern_at_final_settlement() -> TerminatingIntern {
        let mut record = TerminatingIntern::new(
            "t-100",
            "TRM-0100",
            SubjectInfo {
                name: "Jonas Weber".into(),
                ..Default::default()
            },
        );
        record.current_stage = S::FinalSettlement;
        for item in [C::DocumentationReview, C::EquipmentReturn, C::AccessRevocation] {
            record.stage_flags.insert(
                item,
                ChecklistEntry {
                    completed: true,
                    ..Default::default()
                },
            );
        }
        record
    }

    #[tokio::test]
    async fn test_apply_advances_and_persists() {
        let db = memory_db().await;
        let record = intern_at_final_settlement();
        repository::insert(&db, &record).await.unwrap();
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&record), 43);

        let request = ActionRequest::new("schedule_exit_interview");
        let updated = apply::<InternTermination>(&db, "t-100", &request, "Company Admin")
            .await
            .unwrap();

        assert_eq!(updated.current_stage, S::ExitInterview);
        assert!(updated.is_item_completed(C::FinalSettlement));
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&updated), 57);

        let stored = get::<InternTermination>(&db, "t-100").await.unwrap();
        assert_eq!(stored.current_stage, S::ExitInterview);
        assert_eq!(stored.metadata.version, record.metadata.version + 1);
        assert_eq!(stored.notes.len(), 1);
        assert_eq!(stored.notes[0].author, "Company Admin");
    }

    #[tokio::test]
    async fn test_illegal_action_is_rejected_without_write() {
        let db = memory_db().await;
        repository::insert(&db, &intern_at_final_settlement()).await.unwrap();

        let request = ActionRequest::new("complete_termination");
        let err = apply::<InternTermination>(&db, "t-100", &request, "HR")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Transition(TransitionError::NotPermitted { .. })));
        assert!(!err.is_storage());

        let stored = get::<InternTermination>(&db, "t-100").await.unwrap();
        assert_eq!(stored.current_stage, S::FinalSettlement);
        assert_eq!(stored.metadata.version, 0);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let db = memory_db().await;
        let err = apply::<InternTermination>(&db, "missing", &ActionRequest::new("add_note"), "HR")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "intern 'missing' not found");
    }

    #[tokio::test]
    async fn test_stale_version_is_conflict() {
        let db = memory_db().await;
        let record = intern_at_final_settlement();
        repository::insert(&db, &record).await.unwrap();

        let mut moved = record.clone();
        moved.metadata.version = 5;
        assert!(!repository::update_if_version(&db, &moved, 3).await.unwrap());
        assert!(repository::update_if_version(&db, &moved, 0).await.unwrap());
        let stored = get::<InternTermination>(&db, "t-100").await.unwrap();
        assert_eq!(stored.metadata.version, 5);
    }

    #[tokio::test]
    async fn test_test_data_is_inserted_once_per_kind() {
        let db = memory_db().await;
        let inserted = insert_test_data::<EarlyCompletion>(&db).await.unwrap();
        assert!(inserted > 0);
        assert_eq!(insert_test_data::<EarlyCompletion>(&db).await.unwrap(), 0);

        assert_eq!(list::<EarlyCompletion>(&db).await.unwrap().len(), inserted);
        assert!(list::<InternTermination>(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_skips_row_with_unknown_stage() {
        use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

        let db = memory_db().await;
        for (id, code) in [("t-1", "TRM-0001"), ("t-2", "TRM-0002"), ("t-3", "TRM-0003")] {
            let record = TerminatingIntern::new(id, code, SubjectInfo::default());
            repository::insert(&db, &record).await.unwrap();
        }
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "UPDATE lifecycle_records SET current_stage = 'on_hold' WHERE id = 't-1'".to_string(),
        ))
        .await
        .unwrap();

        let records = list::<InternTermination>(&db).await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t-2", "t-3"]);

        let err = get::<InternTermination>(&db, "t-1").await.unwrap_err();
        assert!(err.is_storage());
    }

    #[tokio::test]
    async fn test_extra_body_fields_are_kept_in_history() {
        use contracts::shared::lifecycle::PatchStyle;

        let db = memory_db().await;
        repository::insert(&db, &intern_at_final_settlement()).await.unwrap();

        let body = serde_json::json!({
            "action": "schedule_exit_interview",
            "notes": "Room 4B",
            "interviewDate": "2026-11-02"
        });
        let request = ActionRequest::from_body(PatchStyle::Action, &body).unwrap();
        apply::<InternTermination>(&db, "t-100", &request, "HR").await.unwrap();

        let stored = get::<InternTermination>(&db, "t-100").await.unwrap();
        let note = stored.notes.last().unwrap();
        assert_eq!(note.content, "Room 4B");
        assert_eq!(note.details.get("interviewDate"), Some(&serde_json::json!("2026-11-02")));
        assert!(!note.details.contains_key("action"));
    }
}
