use chrono::{DateTime, Utc};
use contracts::domain::a004_talent_track::{
    AdvancedEmployee, ReadinessLevel, RiskProfile, TalentAttributes, TalentReason,
    TalentStage as S, TalentTrack,
};

use crate::domain::lifecycle::seed::{person, DemoData, DemoRecord};

impl DemoData for TalentTrack {
    fn demo_records(now: DateTime<Utc>) -> Vec<AdvancedEmployee> {
        let clara = person("Clara Hoffmann", "Senior Engineer", "Engineering", "Platform Team");
        let felix = person("Felix Wagner", "Product Manager", "Product", "Growth");
        let ines = person("Ines Costa", "Sales Lead", "Sales", "Southern Europe");
        let oskar = person("Oskar Lind", "Staff Engineer", "Engineering", "Infrastructure");

        vec![
            DemoRecord::new(1, clara, now, 60)
                .stage(S::SuccessionCandidate)
                .reason(TalentReason::SuccessionPlanning, "manager", "")
                .attributes(TalentAttributes {
                    is_successor: true,
                    successor_for: vec!["Head of Platform".to_string()],
                    readiness_level: ReadinessLevel::ReadyOneYear,
                    risk_profile: RiskProfile::Low,
                })
                .build(),
            DemoRecord::new(2, felix, now, 30)
                .stage(S::RetentionRisk)
                .reason(
                    TalentReason::RetentionReview,
                    "hr",
                    "Received an external offer",
                )
                .attributes(TalentAttributes {
                    risk_profile: RiskProfile::High,
                    ..Default::default()
                })
                .build(),
            DemoRecord::new(3, ines, now, 45)
                .stage(S::PromotionReady)
                .reason(TalentReason::PerformanceReview, "manager", "")
                .attributes(TalentAttributes {
                    readiness_level: ReadinessLevel::ReadyNow,
                    ..Default::default()
                })
                .build(),
            DemoRecord::new(4, oskar, now, 10)
                .reason(TalentReason::ManagerNomination, "manager", "")
                .attributes(TalentAttributes {
                    risk_profile: RiskProfile::Medium,
                    readiness_level: ReadinessLevel::ReadyTwoYears,
                    ..Default::default()
                })
                .build(),
        ]
    }
}
