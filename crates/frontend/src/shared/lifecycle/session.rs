use contracts::shared::lifecycle::{
    plan_action, ActionRequest, LifecycleDefinition, LifecycleRecord,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::error::LifecycleError;
use super::store::LifecycleStore;
use super::transport::LifecycleTransport;

/// Связка хранилища и транспорта для одной страницы.
///
/// Заимствование `RefCell` никогда не удерживается через `.await`:
/// хранилище читается до запроса и обновляется после него.
pub struct LifecycleSession<D: LifecycleDefinition, T> {
    store: Rc<RefCell<LifecycleStore<D>>>,
    transport: Rc<T>,
}

impl<D: LifecycleDefinition, T> Clone for LifecycleSession<D, T> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            transport: Rc::clone(&self.transport),
        }
    }
}

impl<D: LifecycleDefinition, T: LifecycleTransport<D>> LifecycleSession<D, T> {
    pub fn new(transport: T) -> Self {
        Self {
            store: Rc::new(RefCell::new(LifecycleStore::new())),
            transport: Rc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Чтение хранилища без удержания заимствования
    pub fn with_store<R>(&self, f: impl FnOnce(&LifecycleStore<D>) -> R) -> R {
        f(&self.store.borrow())
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.store.borrow().is_in_flight(id)
    }

    /// Перезагрузить список с сервера. Возвращает число записей.
    pub async fn refresh(&self) -> Result<usize, LifecycleError> {
        let records = self.transport.list().await?;
        let count = records.len();
        self.store.borrow_mut().replace_all(records);
        log::debug!("{}: loaded {} records", D::full_name(), count);
        Ok(count)
    }

    /// Выполнить действие над записью.
    ///
    /// Действие сначала проверяется локально той же таблицей переходов, что и на
    /// сервере. Пока запрос по записи не завершён, повторный вызов сразу
    /// возвращает `Busy` и ничего не отправляет. При успехе запись в хранилище
    /// заменяется ответом сервера.
    pub async fn trigger(
        &self,
        id: &str,
        action_id: &str,
        note: Option<String>,
    ) -> Result<LifecycleRecord<D>, LifecycleError> {
        let request = {
            let mut store = self.store.borrow_mut();
            let record = store
                .get(id)
                .ok_or_else(|| LifecycleError::NotFound(id.to_string()))?;
            let request = ActionRequest::new(action_id).with_notes(note);
            plan_action(record, action_id, request.notes_str())?;

            if !store.begin_flight(id) {
                return Err(LifecycleError::Busy(id.to_string()));
            }
            request
        };

        let result = self.transport.apply(id, &request).await;

        let mut store = self.store.borrow_mut();
        store.end_flight(id);
        let updated = result?;
        if !store.patch_one(id, updated.clone()) {
            log::warn!("{}: record {} disappeared during update", D::full_name(), id);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use contracts::domain::a002_intern_termination::{
        InternTermination, TerminatingIntern, TerminationChecklist as C, TerminationStage as S,
    };
    use contracts::domain::a005_early_completion::{EarlyCompletion, EarlyCompletionRequest};
    use contracts::shared::lifecycle::{
        apply_plan, ChecklistEntry, ChecklistProgress, SubjectInfo,
    };
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    /// Сервер в памяти: применяет действие той же логикой, что и backend
    struct FakeServer<D: LifecycleDefinition> {
        records: RefCell<Vec<LifecycleRecord<D>>>,
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        failure: RefCell<Option<LifecycleError>>,
    }

    impl<D: LifecycleDefinition> FakeServer<D> {
        fn new(records: Vec<LifecycleRecord<D>>) -> Self {
            Self {
                records: RefCell::new(records),
                calls: Cell::new(0),
                gate: RefCell::new(None),
                failure: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl<D: LifecycleDefinition> LifecycleTransport<D> for FakeServer<D> {
        async fn list(&self) -> Result<Vec<LifecycleRecord<D>>, LifecycleError> {
            Ok(self.records.borrow().clone())
        }

        async fn apply(
            &self,
            id: &str,
            request: &ActionRequest,
        ) -> Result<LifecycleRecord<D>, LifecycleError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if let Some(err) = self.failure.borrow_mut().take() {
                return Err(err);
            }

            let mut records = self.records.borrow_mut();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| LifecycleError::Application(format!("'{}' not found", id)))?;
            let plan = plan_action(slot, &request.action, request.notes_str())
                .map_err(|e| LifecycleError::Application(e.to_string()))?;
            *slot = apply_plan(slot, &plan, "Company Admin", request.notes_str(), Utc::now());
            Ok(slot.clone())
        }
    }

    fn intern_at_final_settlement() -> TerminatingIntern {
        let mut record = TerminatingIntern::new(
            "t-1",
            "TRM-0001",
            SubjectInfo {
                name: "Jonas Weber".to_string(),
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

    fn loaded_session(
        records: Vec<TerminatingIntern>,
    ) -> LifecycleSession<InternTermination, FakeServer<InternTermination>> {
        let session = LifecycleSession::new(FakeServer::new(records));
        block_on(session.refresh()).unwrap();
        session
    }

    #[test]
    fn test_exit_interview_end_to_end() {
        let session = loaded_session(vec![intern_at_final_settlement()]);
        let before = session.with_store(|s| s.get("t-1").cloned()).unwrap();
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&before), 43);

        let updated = block_on(session.trigger("t-1", "schedule_exit_interview", None)).unwrap();
        assert_eq!(updated.current_stage, S::ExitInterview);
        assert!(updated.is_item_completed(C::FinalSettlement));

        let stored = session.with_store(|s| s.get("t-1").cloned()).unwrap();
        assert_eq!(stored, updated);
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&stored), 57);
        assert!(!session.is_in_flight("t-1"));
    }

    #[test]
    fn test_second_trigger_is_busy_and_not_sent() {
        let session = loaded_session(vec![intern_at_final_settlement()]);
        let (release, gate) = oneshot::channel();
        *session.transport().gate.borrow_mut() = Some(gate);

        let mut pool = LocalPool::new();
        let first_result = Rc::new(RefCell::new(None));
        {
            let session = session.clone();
            let first_result = Rc::clone(&first_result);
            pool.spawner()
                .spawn_local(async move {
                    let result = session.trigger("t-1", "schedule_exit_interview", None).await;
                    *first_result.borrow_mut() = Some(result);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(session.is_in_flight("t-1"));

        let second = block_on(session.trigger("t-1", "schedule_exit_interview", None));
        assert_eq!(second, Err(LifecycleError::Busy("t-1".to_string())));

        release.send(()).unwrap();
        pool.run();
        assert!(first_result.borrow().as_ref().unwrap().is_ok());
        assert_eq!(session.transport().calls.get(), 1);
        assert!(!session.is_in_flight("t-1"));
    }

    #[test]
    fn test_failure_keeps_record_and_clears_flight() {
        let session = loaded_session(vec![intern_at_final_settlement()]);
        *session.transport().failure.borrow_mut() = Some(LifecycleError::Timeout(15));

        let err = block_on(session.trigger("t-1", "schedule_exit_interview", None)).unwrap_err();
        assert_eq!(err, LifecycleError::Timeout(15));
        assert!(!session.is_in_flight("t-1"));
        let stored = session.with_store(|s| s.get("t-1").cloned()).unwrap();
        assert_eq!(stored.current_stage, S::FinalSettlement);

        // повтор после ошибки проходит
        assert!(block_on(session.trigger("t-1", "schedule_exit_interview", None)).is_ok());
    }

    #[test]
    fn test_local_validation_sends_nothing() {
        let session = loaded_session(vec![intern_at_final_settlement()]);

        let err = block_on(session.trigger("t-1", "complete_termination", None)).unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));
        let err = block_on(session.trigger("missing", "add_note", None)).unwrap_err();
        assert_eq!(err, LifecycleError::NotFound("missing".to_string()));
        assert_eq!(session.transport().calls.get(), 0);
    }

    #[test]
    fn test_reject_requires_reason() {
        let request = EarlyCompletionRequest::new("r-1", "ECR-0001", SubjectInfo::default());
        let session: LifecycleSession<EarlyCompletion, _> =
            LifecycleSession::new(FakeServer::new(vec![request]));
        block_on(session.refresh()).unwrap();

        let err = block_on(session.trigger("r-1", "reject", Some("   ".to_string()))).unwrap_err();
        assert_eq!(err.user_message(), "Please provide a reason for 'Reject'");

        let rejected =
            block_on(session.trigger("r-1", "reject", Some("Budget freeze".to_string()))).unwrap();
        assert_eq!(rejected.notes.last().unwrap().content, "Budget freeze");
        assert_eq!(session.transport().calls.get(), 1);
    }
}
