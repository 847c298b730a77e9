//! Заголовки вкладок. Для страниц жизненного цикла берутся из `list_name` вида.

use contracts::domain::a001_employee_closure::EmployeeClosure;
use contracts::domain::a002_intern_termination::InternTermination;
use contracts::domain::a003_intern_completion::InternCompletion;
use contracts::domain::a004_talent_track::TalentTrack;
use contracts::domain::a005_early_completion::EarlyCompletion;
use contracts::shared::lifecycle::LifecycleDefinition;

/// Читаемый заголовок вкладки. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_employee_closure" => EmployeeClosure::list_name(),
        "a002_intern_termination" => InternTermination::list_name(),
        "a003_intern_completion" => InternCompletion::list_name(),
        "a004_talent_track" => TalentTrack::list_name(),
        "a005_early_completion" => EarlyCompletion::list_name(),
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_its_own_label() {
        assert_eq!(tab_label_for_key("sys_unknown"), "sys_unknown");
        assert_ne!(tab_label_for_key("a004_talent_track"), "a004_talent_track");
    }
}
