use contracts::shared::lifecycle::{
    ChecklistProgress, CodedVariant, LifecycleDefinition, LifecycleRecord,
};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Записи одного вида, загруженные в текущей сессии страницы.
///
/// Порядок записей соответствует ответу сервера. Обновление записи всегда
/// заменяет её целиком значением от сервера, слияния полей нет.
/// Здесь же ведётся реестр записей, по которым запрос ещё не завершился.
#[derive(Debug, Clone)]
pub struct LifecycleStore<D: LifecycleDefinition> {
    records: Vec<LifecycleRecord<D>>,
    in_flight: HashSet<String>,
}

impl<D: LifecycleDefinition> Default for LifecycleStore<D> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            in_flight: HashSet::new(),
        }
    }
}

impl<D: LifecycleDefinition> LifecycleStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, records: Vec<LifecycleRecord<D>>) {
        self.records = records;
    }

    /// Заменить запись `id` на `record`. Неизвестный `id` ничего не меняет.
    pub fn patch_one(&mut self, id: &str, record: LifecycleRecord<D>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&LifecycleRecord<D>> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[LifecycleRecord<D>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Отфильтрованная и отсортированная копия; вычисляется при каждом вызове
    pub fn filtered_and_sorted<P, C>(&self, predicate: P, comparator: C) -> Vec<LifecycleRecord<D>>
    where
        P: Fn(&LifecycleRecord<D>) -> bool,
        C: Fn(&LifecycleRecord<D>, &LifecycleRecord<D>) -> Ordering,
    {
        let mut view: Vec<_> = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        view.sort_by(|a, b| comparator(a, b));
        view
    }

    // ============================================================================
    // Реестр запросов в полёте
    // ============================================================================

    /// Отметить начало запроса. `false`, если по записи уже идёт запрос.
    pub fn begin_flight(&mut self, id: &str) -> bool {
        self.in_flight.insert(id.to_string())
    }

    pub fn end_flight(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }
}

// ============================================================================
// Поиск, фильтр и сортировка для доски
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Code,
    Name,
    Stage,
    Progress,
    Updated,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Code,
            SortKey::Name,
            SortKey::Stage,
            SortKey::Progress,
            SortKey::Updated,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Code => "code",
            SortKey::Name => "name",
            SortKey::Stage => "stage",
            SortKey::Progress => "progress",
            SortKey::Updated => "updated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Code => "Code",
            SortKey::Name => "Name",
            SortKey::Stage => "Stage",
            SortKey::Progress => "Progress",
            SortKey::Updated => "Last update",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.code() == code)
            .unwrap_or_default()
    }
}

/// Состояние панели поиска над списком
#[derive(Debug, Clone, PartialEq)]
pub struct BoardQuery<D: LifecycleDefinition> {
    pub search: String,
    /// `None` означает все стадии
    pub stage: Option<D::Stage>,
    /// `None` означает любые причины; запись без причины проходит только этот вариант
    pub reason: Option<D::Reason>,
    pub sort: SortKey,
    pub ascending: bool,
}

impl<D: LifecycleDefinition> Default for BoardQuery<D> {
    fn default() -> Self {
        Self {
            search: String::new(),
            stage: None,
            reason: None,
            sort: SortKey::default(),
            ascending: true,
        }
    }
}

impl<D: LifecycleDefinition> BoardQuery<D> {
    pub fn matches(&self, record: &LifecycleRecord<D>) -> bool {
        self.stage.map_or(true, |s| record.current_stage == s)
            && self
                .reason
                .map_or(true, |r| record.reason.as_ref().map(|info| info.category) == Some(r))
            && record.matches_search(&self.search)
    }

    pub fn compare(&self, a: &LifecycleRecord<D>, b: &LifecycleRecord<D>) -> Ordering {
        let ordering = match self.sort {
            SortKey::Code => a.code.cmp(&b.code),
            SortKey::Name => a
                .subject
                .name
                .to_lowercase()
                .cmp(&b.subject.name.to_lowercase()),
            SortKey::Stage => a.current_stage.position().cmp(&b.current_stage.position()),
            SortKey::Progress => ChecklistProgress::<D>::percent_complete(a)
                .cmp(&ChecklistProgress::<D>::percent_complete(b)),
            SortKey::Updated => a.metadata.updated_at.cmp(&b.metadata.updated_at),
        };
        let ordering = ordering.then_with(|| a.code.cmp(&b.code));
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    /// Применить запрос к хранилищу
    pub fn apply(&self, store: &LifecycleStore<D>) -> Vec<LifecycleRecord<D>> {
        store.filtered_and_sorted(|r| self.matches(r), |a, b| self.compare(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a002_intern_termination::{
        InternTermination, TerminatingIntern, TerminationReason as R, TerminationStage as S,
    };
    use contracts::shared::lifecycle::{AuditNote, ReasonInfo, SubjectInfo};

    fn intern(id: &str, code: &str, name: &str, stage: S) -> TerminatingIntern {
        let mut record = TerminatingIntern::new(
            id,
            code,
            SubjectInfo {
                name: name.to_string(),
                ..Default::default()
            },
        );
        record.current_stage = stage;
        record
    }

    fn store() -> LifecycleStore<InternTermination> {
        let mut store = LifecycleStore::new();
        store.replace_all(vec![
            intern("a", "TRM-0002", "Zoe Adams", S::NoticePeriod),
            intern("b", "TRM-0001", "Jonas Weber", S::FinalSettlement),
            intern("c", "TRM-0003", "Ana Lima", S::NoticePeriod),
        ]);
        store
    }

    #[test]
    fn test_patch_replaces_whole_record() {
        let mut store = store();
        let mut server = intern("b", "TRM-0001", "Jonas Weber", S::ExitInterview);
        server.notes.clear();
        assert!(store.patch_one("b", server.clone()));
        assert_eq!(store.get("b"), Some(&server));
        assert_eq!(store.len(), 3);
        // порядок не меняется
        assert_eq!(store.records()[1].id, "b");
    }

    #[test]
    fn test_patch_drops_fields_missing_from_server_copy() {
        let mut store = store();
        let mut local = intern("b", "TRM-0001", "Jonas Weber", S::FinalSettlement);
        local.reason = Some(ReasonInfo {
            category: R::PersonalReasons,
            initiated_by: Some("intern".to_string()),
            details: "Relocation".to_string(),
        });
        local.notes.push(AuditNote {
            id: "n-1".to_string(),
            author: "HR".to_string(),
            content: "Exit paperwork sent".to_string(),
            timestamp: Utc::now(),
            action: None,
            from_stage: None,
            to_stage: None,
            details: Default::default(),
        });
        assert!(store.patch_one("b", local));

        let server: TerminatingIntern =
            serde_json::from_str(r#"{"id":"b","currentStage":"exit_interview"}"#).unwrap();
        assert!(store.patch_one("b", server));

        let stored = store.get("b").unwrap();
        assert_eq!(stored.current_stage, S::ExitInterview);
        assert!(stored.notes.is_empty());
        assert!(stored.reason.is_none());
        assert_eq!(stored.subject.name, "");
        assert_eq!(stored.code, "");
    }

    #[test]
    fn test_patch_unknown_id_is_noop() {
        let mut store = store();
        let before = store.records().to_vec();
        assert!(!store.patch_one("zzz", intern("zzz", "X", "X", S::Initiated)));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_flight_registry_is_per_record() {
        let mut store = store();
        assert!(store.begin_flight("a"));
        assert!(!store.begin_flight("a"));
        assert!(store.begin_flight("b"));
        store.end_flight("a");
        assert!(!store.is_in_flight("a"));
        assert!(store.is_in_flight("b"));
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let store = store();
        let mut query = BoardQuery::<InternTermination> {
            stage: Some(S::NoticePeriod),
            sort: SortKey::Name,
            ..Default::default()
        };
        let names: Vec<_> = query.apply(&store).into_iter().map(|r| r.id).collect();
        assert_eq!(names, vec!["c", "a"]);

        query.stage = None;
        query.sort = SortKey::Code;
        query.ascending = false;
        let codes: Vec<_> = query.apply(&store).into_iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["TRM-0003", "TRM-0002", "TRM-0001"]);

        query.search = "weber".to_string();
        assert_eq!(query.apply(&store).len(), 1);
    }

    #[test]
    fn test_query_filters_by_reason() {
        let mut store = store();
        let mut with_reason = |id: &str, category: R| {
            let mut record = store.get(id).cloned().unwrap();
            record.reason = Some(ReasonInfo {
                category,
                initiated_by: None,
                details: String::new(),
            });
            store.patch_one(id, record);
        };
        with_reason("a", R::PolicyViolation);
        with_reason("b", R::CompanyRestructure);

        let mut query = BoardQuery::<InternTermination> {
            reason: Some(R::PolicyViolation),
            ..Default::default()
        };
        let ids: Vec<_> = query.apply(&store).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a"]);

        query.stage = Some(S::FinalSettlement);
        assert!(query.apply(&store).is_empty());

        // запись "c" без причины видна только без фильтра
        query = BoardQuery::default();
        assert_eq!(query.apply(&store).len(), 3);
    }
}
