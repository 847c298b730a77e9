use contracts::domain::a001_employee_closure::{ClosedEmployee, ClosureCategory, EmployeeClosure};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date;
use crate::shared::lifecycle::{badge, field, lifecycle_board, BoardConfig};

fn category_badge(category: ClosureCategory) -> AnyView {
    match category {
        ClosureCategory::Voluntary => badge("bg-blue-100 text-blue-800", "Voluntary"),
        ClosureCategory::Involuntary => badge("bg-red-100 text-red-800", "Involuntary"),
        ClosureCategory::Neutral => badge("bg-gray-100 text-gray-800", "Neutral"),
    }
}

fn badges(record: &ClosedEmployee) -> AnyView {
    let attrs = &record.attributes;
    view! {
        {category_badge(attrs.closure_category)}
        {attrs.rehire_eligible.then(|| badge("bg-green-100 text-green-800", "Rehire eligible"))}
    }
    .into_any()
}

fn details(record: &ClosedEmployee) -> AnyView {
    let attrs = &record.attributes;
    view! {
        {field("Last working day", format_optional_date(attrs.last_working_day))}
        {field("Rehire eligible", if attrs.rehire_eligible { "Yes" } else { "No" })}
        {field("Department", record.subject.department.clone())}
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn ClosedEmployeesPage() -> impl IntoView {
    lifecycle_board::<EmployeeClosure>(BoardConfig {
        title: "Closed Employees",
        subtitle: "Offboarding from notice period to alumni network",
        badges,
        details,
    })
}
