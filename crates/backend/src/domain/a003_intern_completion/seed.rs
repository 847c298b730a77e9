use chrono::{DateTime, Duration, Utc};
use contracts::domain::a003_intern_completion::{
    CompletingIntern, CompletionAttributes, CompletionChecklist as C, CompletionReason,
    CompletionStage as S, InternCompletion,
};

use crate::domain::lifecycle::seed::{person, DemoData, DemoRecord};

impl DemoData for InternCompletion {
    fn demo_records(now: DateTime<Utc>) -> Vec<CompletingIntern> {
        let sofia = person("Sofia Martins", "Frontend Intern", "Engineering", "University of Porto");
        let ahmed = person("Ahmed Karimi", "Finance Intern", "Finance", "WU Vienna");
        let julia = person("Julia Nowak", "Research Intern", "R&D", "Warsaw University of Technology");

        vec![
            DemoRecord::new(1, sofia, now, 120)
                .stage(S::PerformanceEvaluation)
                .done(&[C::ProjectReview])
                .reason(CompletionReason::ScheduledEnd, "company", "")
                .attributes(CompletionAttributes {
                    mentor: "David Klein".to_string(),
                    supervisor: "Eva Braun".to_string(),
                    end_date: Some(now + Duration::days(10)),
                    projects: vec![
                        "Design system migration".to_string(),
                        "Checkout accessibility audit".to_string(),
                    ],
                })
                .build(),
            DemoRecord::new(2, ahmed, now, 90)
                .reason(CompletionReason::ScheduledEnd, "company", "")
                .attributes(CompletionAttributes {
                    mentor: "Nina Hofer".to_string(),
                    supervisor: "Paul Gruber".to_string(),
                    end_date: Some(now + Duration::days(30)),
                    projects: vec!["Quarterly close automation".to_string()],
                })
                .build(),
            DemoRecord::new(3, julia, now, 200)
                .stage(S::Extended)
                .reason(
                    CompletionReason::ExtensionEnd,
                    "supervisor",
                    "Extended by three months to finish the prototype",
                )
                .attributes(CompletionAttributes {
                    mentor: "Piotr Zielinski".to_string(),
                    supervisor: "Eva Braun".to_string(),
                    end_date: Some(now + Duration::days(60)),
                    projects: vec!["Battery degradation model".to_string()],
                })
                .build(),
        ]
    }
}
