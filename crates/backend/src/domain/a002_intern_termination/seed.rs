use chrono::{DateTime, Duration, Utc};
use contracts::domain::a002_intern_termination::{
    InternTermination, SeverityLevel, TerminatingIntern, TerminationAttributes,
    TerminationChecklist as C, TerminationReason, TerminationStage as S,
};

use crate::domain::lifecycle::seed::{person, DemoData, DemoRecord};

impl DemoData for InternTermination {
    fn demo_records(now: DateTime<Utc>) -> Vec<TerminatingIntern> {
        let jonas = person("Jonas Weber", "Data Analyst Intern", "Analytics", "TU Munich");
        let priya = person("Priya Sharma", "UX Design Intern", "Product", "RWTH Aachen");
        let kim = person("Kim Lee", "Marketing Intern", "Marketing", "University of Vienna");

        vec![
            DemoRecord::new(1, jonas, now, 18)
                .stage(S::FinalSettlement)
                .done(&[C::DocumentationReview, C::EquipmentReturn, C::AccessRevocation])
                .reason(
                    TerminationReason::PersonalReasons,
                    "intern",
                    "Returning to full-time studies",
                )
                .attributes(TerminationAttributes {
                    severity_level: SeverityLevel::Low,
                    notice_period_days: 14,
                    last_working_day: Some(now + Duration::days(3)),
                })
                .build(),
            DemoRecord::new(2, priya, now, 2)
                .reason(
                    TerminationReason::PolicyViolation,
                    "company",
                    "Repeated unexcused absences",
                )
                .attributes(TerminationAttributes {
                    severity_level: SeverityLevel::High,
                    notice_period_days: 7,
                    last_working_day: Some(now + Duration::days(7)),
                })
                .note("HR Team", "Meeting with the university coordinator requested")
                .build(),
            DemoRecord::new(3, kim, now, 9)
                .stage(S::NoticePeriod)
                .reason(TerminationReason::CompanyRestructure, "company", "")
                .attributes(TerminationAttributes {
                    severity_level: SeverityLevel::Medium,
                    notice_period_days: 30,
                    last_working_day: Some(now + Duration::days(21)),
                })
                .build(),
        ]
    }
}
