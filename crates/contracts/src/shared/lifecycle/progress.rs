use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::definition::{CodedVariant, LifecycleDefinition};
use super::record::LifecycleRecord;

/// Чек-лист для видов, у которых нет пунктов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoChecklist {}

impl CodedVariant for NoChecklist {
    fn all() -> &'static [Self] {
        &[]
    }

    fn code(&self) -> &'static str {
        match *self {}
    }

    fn label(&self) -> &'static str {
        match *self {}
    }
}

/// Строка чек-листа для отображения
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistRow<C> {
    pub item: C,
    pub label: &'static str,
    pub completed: bool,
}

/// Прогресс чек-листа записи
pub struct ChecklistProgress<D>(PhantomData<D>);

impl<D: LifecycleDefinition> ChecklistProgress<D> {
    pub fn total() -> usize {
        D::Checklist::all().len()
    }

    /// Количество выполненных пунктов из каталога вида
    pub fn completed_count(record: &LifecycleRecord<D>) -> usize {
        D::Checklist::all()
            .iter()
            .filter(|item| record.is_item_completed(**item))
            .count()
    }

    /// Процент выполнения 0..=100, округление половины вверх.
    /// Вид без чек-листа всегда даёт 0.
    pub fn percent_complete(record: &LifecycleRecord<D>) -> u8 {
        let total = Self::total();
        if total == 0 {
            return 0;
        }
        let done = Self::completed_count(record);
        ((done * 200 + total) / (2 * total)) as u8
    }

    /// Пункты в каноническом порядке с отметкой выполнения
    pub fn items(record: &LifecycleRecord<D>) -> Vec<ChecklistRow<D::Checklist>> {
        D::Checklist::all()
            .iter()
            .map(|item| ChecklistRow {
                item: *item,
                label: item.label(),
                completed: record.is_item_completed(*item),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_intern_termination::{
        InternTermination, TerminatingIntern, TerminationChecklist as C,
    };
    use crate::shared::lifecycle::ChecklistEntry;

    fn intern_with(items: &[C]) -> TerminatingIntern {
        let mut record = TerminatingIntern::new("t-1", "TRM-0001", Default::default());
        for item in items {
            record.stage_flags.insert(
                *item,
                ChecklistEntry {
                    completed: true,
                    ..Default::default()
                },
            );
        }
        record
    }

    #[test]
    fn test_three_of_seven_rounds_to_43() {
        let record = intern_with(&[C::DocumentationReview, C::EquipmentReturn, C::AccessRevocation]);
        assert_eq!(ChecklistProgress::<InternTermination>::completed_count(&record), 3);
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&record), 43);
    }

    #[test]
    fn test_four_of_seven_rounds_to_57() {
        let record = intern_with(&[
            C::DocumentationReview,
            C::EquipmentReturn,
            C::AccessRevocation,
            C::FinalSettlement,
        ]);
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&record), 57);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(ChecklistProgress::<InternTermination>::percent_complete(&intern_with(&[])), 0);
        assert_eq!(
            ChecklistProgress::<InternTermination>::percent_complete(&intern_with(C::all())),
            100
        );
    }

    #[test]
    fn test_progress_is_idempotent() {
        let record = intern_with(&[C::ExitInterview]);
        let first = ChecklistProgress::<InternTermination>::percent_complete(&record);
        let second = ChecklistProgress::<InternTermination>::percent_complete(&record);
        assert_eq!(first, second);
        assert_eq!(first, 14);
    }

    #[test]
    fn test_unchecked_entry_does_not_count() {
        let mut record = intern_with(&[C::LegalClearance]);
        record.stage_flags.insert(C::KnowledgeTransfer, ChecklistEntry::default());
        assert_eq!(ChecklistProgress::<InternTermination>::completed_count(&record), 1);

        let rows = ChecklistProgress::<InternTermination>::items(&record);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].label, "Documentation Review");
        assert!(rows[6].completed);
    }
}
