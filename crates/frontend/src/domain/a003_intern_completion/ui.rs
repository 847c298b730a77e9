use contracts::domain::a003_intern_completion::{CompletingIntern, InternCompletion};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date;
use crate::shared::lifecycle::{badge, field, lifecycle_board, BoardConfig};

fn badges(record: &CompletingIntern) -> AnyView {
    let projects = record.attributes.projects.len();
    badge(
        "bg-indigo-100 text-indigo-800",
        format!("{} project{}", projects, if projects == 1 { "" } else { "s" }),
    )
}

fn details(record: &CompletingIntern) -> AnyView {
    let attrs = &record.attributes;
    let projects = if attrs.projects.is_empty() {
        "-".to_string()
    } else {
        attrs.projects.join(", ")
    };
    view! {
        {field("End date", format_optional_date(attrs.end_date))}
        {field("Mentor", attrs.mentor.clone())}
        {field("Supervisor", attrs.supervisor.clone())}
        {field("Projects", projects)}
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn InternCompletionPage() -> impl IntoView {
    lifecycle_board::<InternCompletion>(BoardConfig {
        title: "Intern Completion",
        subtitle: "Wrap up internships: reviews, certificates and alumni onboarding",
        badges,
        details,
    })
}
