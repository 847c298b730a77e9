use contracts::domain::a002_intern_termination::{InternTermination, TerminatingIntern};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date;
use crate::shared::lifecycle::{badge, field, lifecycle_board, BoardConfig};

fn badges(record: &TerminatingIntern) -> AnyView {
    let severity = record.attributes.severity_level;
    badge(severity.color(), format!("{:?} severity", severity))
}

fn details(record: &TerminatingIntern) -> AnyView {
    let attrs = &record.attributes;
    view! {
        {field("Notice period", format!("{} days", attrs.notice_period_days))}
        {field("Last working day", format_optional_date(attrs.last_working_day))}
        {field("University", record.subject.organization.clone())}
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn InternTerminationPage() -> impl IntoView {
    lifecycle_board::<InternTermination>(BoardConfig {
        title: "Intern Termination",
        subtitle: "Manage early termination of internships",
        badges,
        details,
    })
}
