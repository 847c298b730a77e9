use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::lifecycle::{
    ActionSeverity, AuxiliaryAction, LifecycleDefinition, LifecycleRecord, PatchStyle,
    StageStyle, TransitionRule, ADD_NOTE, GENERATE_REPORT,
};

// ============================================================================
// Стадии, чек-лист, причины
// ============================================================================

coded_enum! {
    /// Стадия досрочного прекращения стажировки
    pub enum TerminationStage {
        Initiated => "initiated", "Initiated",
        NoticePeriod => "notice_period", "Notice Period",
        DocumentationReview => "documentation_review", "Documentation Review",
        EquipmentReturn => "equipment_return", "Equipment Return",
        AccessRevocation => "access_revocation", "Access Revocation",
        FinalSettlement => "final_settlement", "Final Settlement",
        ExitInterview => "exit_interview", "Exit Interview",
        KnowledgeTransfer => "knowledge_transfer", "Knowledge Transfer",
        LegalClearance => "legal_clearance", "Legal Clearance",
        Completed => "completed", "Completed",
        Cancelled => "cancelled", "Cancelled",
    }
}

coded_enum! {
    pub enum TerminationChecklist {
        DocumentationReview => "documentationReview", "Documentation Review",
        EquipmentReturn => "equipmentReturn", "Equipment Return",
        AccessRevocation => "accessRevocation", "Access Revocation",
        FinalSettlement => "finalSettlement", "Final Settlement",
        ExitInterview => "exitInterview", "Exit Interview",
        KnowledgeTransfer => "knowledgeTransfer", "Knowledge Transfer",
        LegalClearance => "legalClearance", "Legal Clearance",
    }
}

coded_enum! {
    pub enum TerminationReason {
        Performance => "performance", "Performance",
        Misconduct => "misconduct", "Misconduct",
        PolicyViolation => "policy_violation", "Policy Violation",
        PersonalReasons => "personal_reasons", "Personal Reasons",
        CompanyRestructure => "company_restructure", "Company Restructure",
        MutualAgreement => "mutual_agreement", "Mutual Agreement",
        Other => "other", "Other",
    }
}

/// Степень серьёзности (для бейджа в карточке)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn color(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "bg-green-100 text-green-800",
            SeverityLevel::Medium => "bg-yellow-100 text-yellow-800",
            SeverityLevel::High => "bg-orange-100 text-orange-800",
            SeverityLevel::Critical => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminationAttributes {
    pub severity_level: SeverityLevel,
    pub notice_period_days: u32,
    pub last_working_day: Option<DateTime<Utc>>,
}

pub type TerminatingIntern = LifecycleRecord<InternTermination>;

// ============================================================================
// Определение вида
// ============================================================================

/// Досрочное прекращение стажировки
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InternTermination;

use TerminationChecklist as C;
use TerminationStage as S;

const STAGE_STYLES: &[(TerminationStage, StageStyle)] = &[
    (S::Initiated, StageStyle::new("bg-red-100 text-red-800", "alert-triangle")),
    (S::NoticePeriod, StageStyle::new("bg-orange-100 text-orange-800", "clock")),
    (S::DocumentationReview, StageStyle::new("bg-yellow-100 text-yellow-800", "file-text")),
    (S::EquipmentReturn, StageStyle::new("bg-blue-100 text-blue-800", "package")),
    (S::AccessRevocation, StageStyle::new("bg-purple-100 text-purple-800", "lock")),
    (S::FinalSettlement, StageStyle::new("bg-indigo-100 text-indigo-800", "credit-card")),
    (S::ExitInterview, StageStyle::new("bg-cyan-100 text-cyan-800", "users")),
    (S::KnowledgeTransfer, StageStyle::new("bg-teal-100 text-teal-800", "send")),
    (S::LegalClearance, StageStyle::new("bg-amber-100 text-amber-800", "shield")),
    (S::Completed, StageStyle::new("bg-gray-100 text-gray-800", "check-circle")),
    (S::Cancelled, StageStyle::new("bg-slate-100 text-slate-700", "x-circle")),
];

const TRANSITIONS: &[TransitionRule<TerminationStage, TerminationChecklist>] = &[
    TransitionRule::forward(S::Initiated, "start_notice_period", "Start Notice Period", S::NoticePeriod, None),
    TransitionRule::branch(S::Initiated, "cancel_termination", "Cancel Termination", ActionSeverity::Neutral, S::Cancelled, false),
    TransitionRule::forward(S::NoticePeriod, "review_documentation", "Review Documentation", S::DocumentationReview, None),
    TransitionRule::forward(S::DocumentationReview, "initiate_equipment_return", "Initiate Equipment Return", S::EquipmentReturn, Some(C::DocumentationReview)),
    TransitionRule::forward(S::EquipmentReturn, "revoke_access", "Revoke Access", S::AccessRevocation, Some(C::EquipmentReturn)),
    TransitionRule::forward(S::AccessRevocation, "process_settlement", "Process Final Settlement", S::FinalSettlement, Some(C::AccessRevocation)),
    TransitionRule::forward(S::FinalSettlement, "schedule_exit_interview", "Schedule Exit Interview", S::ExitInterview, Some(C::FinalSettlement)),
    TransitionRule::forward(S::ExitInterview, "initiate_knowledge_transfer", "Initiate Knowledge Transfer", S::KnowledgeTransfer, Some(C::ExitInterview)),
    TransitionRule::forward(S::KnowledgeTransfer, "legal_clearance", "Legal Clearance", S::LegalClearance, Some(C::KnowledgeTransfer)),
    TransitionRule::forward(S::LegalClearance, "complete_termination", "Complete Termination", S::Completed, Some(C::LegalClearance)),
];

const AUXILIARY: &[AuxiliaryAction] = &[ADD_NOTE, GENERATE_REPORT];

impl LifecycleDefinition for InternTermination {
    type Stage = TerminationStage;
    type Checklist = TerminationChecklist;
    type Reason = TerminationReason;
    type Attributes = TerminationAttributes;

    fn index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "intern_termination"
    }

    fn element_name() -> &'static str {
        "intern"
    }

    fn list_name() -> &'static str {
        "terminating interns"
    }

    fn code_prefix() -> &'static str {
        "TRM"
    }

    fn endpoint() -> &'static str {
        "/api/company/recruitment/interns/termination"
    }

    fn patch_style() -> PatchStyle {
        PatchStyle::Status
    }

    fn initial_stage() -> TerminationStage {
        S::Initiated
    }

    fn stage_styles() -> &'static [(TerminationStage, StageStyle)] {
        STAGE_STYLES
    }

    fn transitions() -> &'static [TransitionRule<TerminationStage, TerminationChecklist>] {
        TRANSITIONS
    }

    fn auxiliary_actions() -> &'static [AuxiliaryAction] {
        AUXILIARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::ActionResolver;

    #[test]
    fn test_cancel_only_from_initiated() {
        let record = TerminatingIntern::new("t-1", "TRM-0001", Default::default());
        let at_start = ActionResolver::<InternTermination>::actions_for(S::Initiated, &record);
        assert!(at_start.iter().any(|a| a.id == "cancel_termination"));

        let later = ActionResolver::<InternTermination>::actions_for(S::NoticePeriod, &record);
        assert!(!later.iter().any(|a| a.id == "cancel_termination"));
    }

    #[test]
    fn test_terminal_stages_have_no_forward_action() {
        let record = TerminatingIntern::new("t-1", "TRM-0001", Default::default());
        for stage in [S::Completed, S::Cancelled] {
            let ids: Vec<_> = ActionResolver::<InternTermination>::actions_for(stage, &record)
                .iter()
                .map(|a| a.id)
                .collect();
            assert_eq!(ids, vec!["add_note", "generate_report"]);
        }
    }
}
