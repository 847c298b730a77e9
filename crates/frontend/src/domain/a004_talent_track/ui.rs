use contracts::domain::a004_talent_track::{
    AdvancedEmployee, ReadinessLevel, RiskProfile, TalentTrack,
};
use leptos::prelude::*;

use crate::shared::lifecycle::{badge, field, lifecycle_board, BoardConfig};

fn readiness_label(level: ReadinessLevel) -> &'static str {
    match level {
        ReadinessLevel::ReadyNow => "Ready now",
        ReadinessLevel::ReadyOneYear => "Ready in 1 year",
        ReadinessLevel::ReadyTwoYears => "Ready in 2 years",
        ReadinessLevel::DevelopmentNeeded => "Development needed",
    }
}

fn risk_badge(risk: RiskProfile) -> AnyView {
    match risk {
        RiskProfile::Low => badge("bg-green-100 text-green-800", "Low risk"),
        RiskProfile::Medium => badge("bg-yellow-100 text-yellow-800", "Medium risk"),
        RiskProfile::High => badge("bg-red-100 text-red-800", "High risk"),
    }
}

fn badges(record: &AdvancedEmployee) -> AnyView {
    let attrs = &record.attributes;
    view! {
        {risk_badge(attrs.risk_profile)}
        {attrs.is_successor.then(|| badge("bg-purple-100 text-purple-800", "Successor"))}
    }
    .into_any()
}

fn details(record: &AdvancedEmployee) -> AnyView {
    let attrs = &record.attributes;
    let successor_for = if attrs.successor_for.is_empty() {
        "-".to_string()
    } else {
        attrs.successor_for.join(", ")
    };
    view! {
        {field("Readiness", readiness_label(attrs.readiness_level))}
        {field("Successor for", successor_for)}
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn AdvancedEmployeesPage() -> impl IntoView {
    lifecycle_board::<TalentTrack>(BoardConfig {
        title: "Advanced Employees",
        subtitle: "High performers, succession candidates and retention risks",
        badges,
        details,
    })
}
