use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::lifecycle::{
    ActionSeverity, AuxiliaryAction, LifecycleAction, LifecycleDefinition, LifecycleRecord,
    NoChecklist, PatchStyle, StageStyle, TransitionRule,
};

coded_enum! {
    /// Классификация сотрудника в программе развития талантов.
    /// Это не последовательность: стадия меняется вне этого экрана.
    pub enum TalentStage {
        HighPerformer => "high_performer", "High Performer",
        LeadershipTrack => "leadership_track", "Leadership Track",
        SuccessionCandidate => "succession_candidate", "Succession Candidate",
        RetentionRisk => "retention_risk", "Retention Risk",
        PromotionReady => "promotion_ready", "Promotion Ready",
        CriticalTalent => "critical_talent", "Critical Talent",
    }
}

coded_enum! {
    pub enum TalentReason {
        PerformanceReview => "performance_review", "Performance Review",
        SuccessionPlanning => "succession_planning", "Succession Planning",
        RetentionReview => "retention_review", "Retention Review",
        ManagerNomination => "manager_nomination", "Manager Nomination",
        Other => "other", "Other",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    ReadyNow,
    #[serde(rename = "ready_1_year")]
    ReadyOneYear,
    #[serde(rename = "ready_2_years")]
    ReadyTwoYears,
    #[default]
    DevelopmentNeeded,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentAttributes {
    pub is_successor: bool,
    pub successor_for: Vec<String>,
    pub readiness_level: ReadinessLevel,
    pub risk_profile: RiskProfile,
}

pub type AdvancedEmployee = LifecycleRecord<TalentTrack>;

/// Сопровождение сотрудников в программе развития талантов
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TalentTrack;

use TalentStage as S;

const STAGE_STYLES: &[(TalentStage, StageStyle)] = &[
    (S::HighPerformer, StageStyle::new("bg-green-100 text-green-800", "award")),
    (S::LeadershipTrack, StageStyle::new("bg-blue-100 text-blue-800", "crown")),
    (S::SuccessionCandidate, StageStyle::new("bg-purple-100 text-purple-800", "layers")),
    (S::RetentionRisk, StageStyle::new("bg-red-100 text-red-800", "alert-circle")),
    (S::PromotionReady, StageStyle::new("bg-yellow-100 text-yellow-800", "trending-up")),
    (S::CriticalTalent, StageStyle::new("bg-orange-100 text-orange-800", "star")),
];

const AUXILIARY: &[AuxiliaryAction] = &[
    AuxiliaryAction {
        id: "conduct_talent_review",
        label: "Conduct Talent Review",
        severity: ActionSeverity::Positive,
        requires_note: false,
    },
    AuxiliaryAction::new("update_succession_plan", "Update Succession Plan"),
    AuxiliaryAction {
        id: "assign_strategic_project",
        label: "Assign Strategic Project",
        severity: ActionSeverity::Positive,
        requires_note: false,
    },
    AuxiliaryAction::new("schedule_stay_interview", "Schedule Stay Interview"),
    AuxiliaryAction::new("review_compensation", "Review Compensation"),
    AuxiliaryAction {
        id: "nominate_leadership_program",
        label: "Nominate for Leadership Program",
        severity: ActionSeverity::Positive,
        requires_note: false,
    },
];

const CREATE_RETENTION_PLAN: LifecycleAction = LifecycleAction::conditional(
    "create_retention_plan",
    "Create Retention Plan",
    ActionSeverity::Negative,
);
const INITIATE_PROMOTION: LifecycleAction = LifecycleAction::conditional(
    "initiate_promotion",
    "Initiate Promotion Process",
    ActionSeverity::Positive,
);
const ACCELERATE_DEVELOPMENT: LifecycleAction = LifecycleAction::conditional(
    "accelerate_development",
    "Accelerate Development",
    ActionSeverity::Positive,
);

impl LifecycleDefinition for TalentTrack {
    type Stage = TalentStage;
    type Checklist = NoChecklist;
    type Reason = TalentReason;
    type Attributes = TalentAttributes;

    fn index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "talent_track"
    }

    fn element_name() -> &'static str {
        "employee"
    }

    fn list_name() -> &'static str {
        "advanced employees"
    }

    fn code_prefix() -> &'static str {
        "TAL"
    }

    fn endpoint() -> &'static str {
        "/api/company/employees/advanced"
    }

    fn patch_style() -> PatchStyle {
        PatchStyle::Action
    }

    fn initial_stage() -> TalentStage {
        S::HighPerformer
    }

    fn stage_styles() -> &'static [(TalentStage, StageStyle)] {
        STAGE_STYLES
    }

    fn transitions() -> &'static [TransitionRule<TalentStage, NoChecklist>] {
        &[]
    }

    fn auxiliary_actions() -> &'static [AuxiliaryAction] {
        AUXILIARY
    }

    fn conditional_actions(stage: TalentStage, record: &AdvancedEmployee) -> Vec<LifecycleAction> {
        let mut actions = Vec::new();
        match stage {
            S::RetentionRisk => actions.push(CREATE_RETENTION_PLAN),
            S::PromotionReady => actions.push(INITIATE_PROMOTION),
            _ => {}
        }
        if record.attributes.is_successor {
            actions.push(ACCELERATE_DEVELOPMENT);
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::{ActionKind, ActionResolver, ChecklistProgress};

    fn employee(stage: TalentStage, is_successor: bool) -> AdvancedEmployee {
        let mut record = AdvancedEmployee::new("adv-1", "TAL-0001", Default::default());
        record.current_stage = stage;
        record.attributes.is_successor = is_successor;
        record
    }

    #[test]
    fn test_retention_risk_adds_retention_plan() {
        let record = employee(S::RetentionRisk, false);
        let actions = ActionResolver::<TalentTrack>::actions_for_record(&record);
        assert_eq!(actions[0].id, "create_retention_plan");
        assert_eq!(actions[0].kind, ActionKind::Conditional);
        assert_eq!(actions.len(), 7);
    }

    #[test]
    fn test_successor_gets_accelerated_development() {
        let record = employee(S::PromotionReady, true);
        let ids: Vec<_> = ActionResolver::<TalentTrack>::actions_for_record(&record)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(&ids[..2], &["initiate_promotion", "accelerate_development"]);
    }

    #[test]
    fn test_plain_high_performer_gets_six_actions() {
        let record = employee(S::HighPerformer, false);
        let actions = ActionResolver::<TalentTrack>::actions_for_record(&record);
        assert_eq!(actions.len(), 6);
        assert!(actions.iter().all(|a| a.kind == ActionKind::Auxiliary));
    }

    #[test]
    fn test_progress_without_checklist_is_zero() {
        let record = employee(S::CriticalTalent, true);
        assert_eq!(ChecklistProgress::<TalentTrack>::percent_complete(&record), 0);
    }

    #[test]
    fn test_readiness_level_codes() {
        assert_eq!(
            serde_json::to_string(&ReadinessLevel::ReadyOneYear).unwrap(),
            "\"ready_1_year\""
        );
    }
}
