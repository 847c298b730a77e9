use contracts::domain::a005_early_completion::{EarlyCompletion, EarlyCompletionRequest};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date;
use crate::shared::lifecycle::{badge, field, lifecycle_board, BoardConfig};

fn badges(record: &EarlyCompletionRequest) -> AnyView {
    let urgency = record.attributes.urgency;
    badge(urgency.color(), format!("{:?} urgency", urgency))
}

fn details(record: &EarlyCompletionRequest) -> AnyView {
    let attrs = &record.attributes;
    view! {
        {field("Requested by", attrs.requested_by.clone())}
        {field("Proposed end date", format_optional_date(attrs.proposed_date))}
        {field("Current end date", format_optional_date(attrs.current_end_date))}
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn EarlyCompletionRequestsPage() -> impl IntoView {
    lifecycle_board::<EarlyCompletion>(BoardConfig {
        title: "Early Completion Requests",
        subtitle: "Review requests to end internships ahead of schedule",
        badges,
        details,
    })
}
