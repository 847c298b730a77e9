//! Маппинг tab.key → View. Все ключи вкладок собраны здесь.

use crate::domain::a001_employee_closure::ui::ClosedEmployeesPage;
use crate::domain::a002_intern_termination::ui::InternTerminationPage;
use crate::domain::a003_intern_completion::ui::InternCompletionPage;
use crate::domain::a004_talent_track::ui::AdvancedEmployeesPage;
use crate::domain::a005_early_completion::ui::EarlyCompletionRequestsPage;
use leptos::prelude::*;

/// Ключи страниц в порядке меню
pub const PAGE_KEYS: &[&str] = &[
    "a001_employee_closure",
    "a004_talent_track",
    "a002_intern_termination",
    "a003_intern_completion",
    "a005_early_completion",
];

/// Контент вкладки по её ключу; для неизвестного ключа - заглушка
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_employee_closure" => view! { <ClosedEmployeesPage /> }.into_any(),
        "a002_intern_termination" => view! { <InternTerminationPage /> }.into_any(),
        "a003_intern_completion" => view! { <InternCompletionPage /> }.into_any(),
        "a004_talent_track" => view! { <AdvancedEmployeesPage /> }.into_any(),
        "a005_early_completion" => view! { <EarlyCompletionRequestsPage /> }.into_any(),
        other => {
            log::warn!("Unknown tab key: {}", other);
            let message = format!("Unknown page '{}'", other);
            view! { <div class="page page--empty">{message}</div> }.into_any()
        }
    }
}
