use chrono::{DateTime, Duration, Utc};
use contracts::domain::a005_early_completion::{
    EarlyCompletion, EarlyCompletionRequest, RequestAttributes, RequestStage as S, RequestType,
    Urgency,
};

use crate::domain::lifecycle::seed::{person, DemoData, DemoRecord};

impl DemoData for EarlyCompletion {
    fn demo_records(now: DateTime<Utc>) -> Vec<EarlyCompletionRequest> {
        let mateo = person("Mateo Garcia", "Backend Intern", "Engineering", "TU Berlin");
        let hanna = person("Hanna Berg", "HR Intern", "People", "Lund University");
        let yuki = person("Yuki Tanaka", "Data Intern", "Analytics", "ETH Zurich");

        vec![
            DemoRecord::new(1, mateo, now, 1)
                .reason(
                    RequestType::EarlyCompletion,
                    "intern",
                    "Accepted a full-time offer starting next month",
                )
                .attributes(RequestAttributes {
                    urgency: Urgency::High,
                    requested_by: "Mateo Garcia".to_string(),
                    proposed_date: Some(now + Duration::days(14)),
                    current_end_date: Some(now + Duration::days(60)),
                })
                .build(),
            DemoRecord::new(2, hanna, now, 5)
                .stage(S::UnderReview)
                .reason(RequestType::EarlyTermination, "supervisor", "Project cancelled")
                .attributes(RequestAttributes {
                    urgency: Urgency::Medium,
                    requested_by: "Mia Johansson".to_string(),
                    proposed_date: Some(now + Duration::days(7)),
                    current_end_date: Some(now + Duration::days(45)),
                })
                .build(),
            DemoRecord::new(3, yuki, now, 20)
                .stage(S::Approved)
                .reason(RequestType::EarlyCompletion, "intern", "Thesis deadline moved")
                .attributes(RequestAttributes {
                    urgency: Urgency::Low,
                    requested_by: "Yuki Tanaka".to_string(),
                    proposed_date: Some(now - Duration::days(3)),
                    current_end_date: Some(now + Duration::days(30)),
                })
                .note("Company Admin", "Approved with the university's consent")
                .build(),
        ]
    }
}
