use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::lifecycle::{
    AuxiliaryAction, LifecycleDefinition, LifecycleRecord, PatchStyle, StageStyle,
    TransitionRule, ADD_NOTE, GENERATE_REPORT,
};

// ============================================================================
// Стадии, чек-лист, причины
// ============================================================================

coded_enum! {
    /// Стадия закрытия сотрудника
    pub enum ClosureStage {
        Initiated => "initiated", "Initiated",
        NoticePeriod => "notice_period", "Notice Period",
        KnowledgeTransfer => "knowledge_transfer", "Knowledge Transfer",
        EquipmentReturn => "equipment_return", "Equipment Return",
        AccessRevocation => "access_revocation", "Access Revocation",
        FinalSettlement => "final_settlement", "Final Settlement",
        ExitInterview => "exit_interview", "Exit Interview",
        DocumentationComplete => "documentation_complete", "Documentation Complete",
        AlumniTransition => "alumni_transition", "Alumni Transition",
        Closed => "closed", "Closed",
    }
}

coded_enum! {
    /// Пункт чек-листа закрытия
    pub enum ClosureChecklist {
        KnowledgeTransfer => "knowledgeTransfer", "Knowledge Transfer",
        EquipmentReturn => "equipmentReturn", "Equipment Return",
        AccessRevocation => "accessRevocation", "Access Revocation",
        FinalSettlement => "finalSettlement", "Final Settlement",
        ExitInterview => "exitInterview", "Exit Interview",
        DocumentationComplete => "documentationComplete", "Documentation",
        AlumniTransition => "alumniTransition", "Alumni Transition",
    }
}

coded_enum! {
    /// Причина закрытия
    pub enum ClosureReason {
        Resignation => "resignation", "Resignation",
        Termination => "termination", "Termination",
        Retirement => "retirement", "Retirement",
        Layoff => "layoff", "Layoff",
        EndOfContract => "end_of_contract", "End of Contract",
        MutualAgreement => "mutual_agreement", "Mutual Agreement",
        Death => "death", "Death",
        Other => "other", "Other",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureCategory {
    Voluntary,
    Involuntary,
    #[default]
    Neutral,
}

/// Дополнительные сведения о закрытии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosureAttributes {
    pub closure_category: ClosureCategory,
    pub rehire_eligible: bool,
    pub last_working_day: Option<DateTime<Utc>>,
}

pub type ClosedEmployee = LifecycleRecord<EmployeeClosure>;

// ============================================================================
// Определение вида
// ============================================================================

/// Закрытие сотрудника: от инициации до перевода в alumni
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmployeeClosure;

use ClosureChecklist as C;
use ClosureStage as S;

const STAGE_STYLES: &[(ClosureStage, StageStyle)] = &[
    (S::Initiated, StageStyle::new("bg-blue-100 text-blue-800", "clock")),
    (S::NoticePeriod, StageStyle::new("bg-yellow-100 text-yellow-800", "calendar")),
    (S::KnowledgeTransfer, StageStyle::new("bg-purple-100 text-purple-800", "send")),
    (S::EquipmentReturn, StageStyle::new("bg-orange-100 text-orange-800", "package")),
    (S::AccessRevocation, StageStyle::new("bg-red-100 text-red-800", "lock")),
    (S::FinalSettlement, StageStyle::new("bg-indigo-100 text-indigo-800", "credit-card")),
    (S::ExitInterview, StageStyle::new("bg-cyan-100 text-cyan-800", "message-square")),
    (S::DocumentationComplete, StageStyle::new("bg-teal-100 text-teal-800", "file-check")),
    (S::AlumniTransition, StageStyle::new("bg-green-100 text-green-800", "network")),
    (S::Closed, StageStyle::new("bg-gray-100 text-gray-800", "archive")),
];

const TRANSITIONS: &[TransitionRule<ClosureStage, ClosureChecklist>] = &[
    TransitionRule::forward(S::Initiated, "start_knowledge_transfer", "Start Knowledge Transfer", S::KnowledgeTransfer, None),
    TransitionRule::forward(S::NoticePeriod, "start_knowledge_transfer", "Start Knowledge Transfer", S::KnowledgeTransfer, None),
    TransitionRule::forward(S::KnowledgeTransfer, "initiate_equipment_return", "Initiate Equipment Return", S::EquipmentReturn, Some(C::KnowledgeTransfer)),
    TransitionRule::forward(S::EquipmentReturn, "revoke_access", "Revoke Access", S::AccessRevocation, Some(C::EquipmentReturn)),
    TransitionRule::forward(S::AccessRevocation, "process_final_settlement", "Process Final Settlement", S::FinalSettlement, Some(C::AccessRevocation)),
    TransitionRule::forward(S::FinalSettlement, "schedule_exit_interview", "Schedule Exit Interview", S::ExitInterview, Some(C::FinalSettlement)),
    TransitionRule::forward(S::ExitInterview, "complete_documentation", "Complete Documentation", S::DocumentationComplete, Some(C::ExitInterview)),
    TransitionRule::forward(S::DocumentationComplete, "alumni_transition", "Alumni Transition", S::AlumniTransition, Some(C::DocumentationComplete)),
    TransitionRule::forward(S::AlumniTransition, "close_employee", "Close Employee Record", S::Closed, Some(C::AlumniTransition)),
];

const AUXILIARY: &[AuxiliaryAction] = &[ADD_NOTE, GENERATE_REPORT];

impl LifecycleDefinition for EmployeeClosure {
    type Stage = ClosureStage;
    type Checklist = ClosureChecklist;
    type Reason = ClosureReason;
    type Attributes = ClosureAttributes;

    fn index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "employee_closure"
    }

    fn element_name() -> &'static str {
        "employee"
    }

    fn list_name() -> &'static str {
        "closed employees"
    }

    fn code_prefix() -> &'static str {
        "CLS"
    }

    fn endpoint() -> &'static str {
        "/api/company/employees/closed"
    }

    fn patch_style() -> PatchStyle {
        PatchStyle::Action
    }

    fn initial_stage() -> ClosureStage {
        S::Initiated
    }

    fn stage_styles() -> &'static [(ClosureStage, StageStyle)] {
        STAGE_STYLES
    }

    fn transitions() -> &'static [TransitionRule<ClosureStage, ClosureChecklist>] {
        TRANSITIONS
    }

    fn auxiliary_actions() -> &'static [AuxiliaryAction] {
        AUXILIARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::{ActionResolver, CodedVariant};

    #[test]
    fn test_notice_period_advances_to_knowledge_transfer() {
        let record = ClosedEmployee::new("e-1", "CLS-0001", Default::default());
        let ids: Vec<_> = ActionResolver::<EmployeeClosure>::actions_for(S::NoticePeriod, &record)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["start_knowledge_transfer", "add_note", "generate_report"]);
    }

    #[test]
    fn test_closed_offers_only_auxiliary() {
        let record = ClosedEmployee::new("e-1", "CLS-0001", Default::default());
        let actions = ActionResolver::<EmployeeClosure>::actions_for(S::Closed, &record);
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn test_checklist_codes_are_camel_case() {
        assert_eq!(C::DocumentationComplete.code(), "documentationComplete");
        assert_eq!(
            serde_json::to_string(&C::KnowledgeTransfer).unwrap(),
            "\"knowledgeTransfer\""
        );
        assert_eq!(C::all().len(), 7);
    }
}
