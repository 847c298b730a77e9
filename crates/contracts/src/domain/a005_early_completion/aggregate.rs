use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::lifecycle::{
    ActionSeverity, AuxiliaryAction, LifecycleDefinition, LifecycleRecord, NoChecklist,
    PatchStyle, StageStyle, TransitionRule, ADD_NOTE,
};

coded_enum! {
    /// Состояние заявки на досрочное завершение
    pub enum RequestStage {
        Pending => "pending", "Pending",
        UnderReview => "under_review", "Under Review",
        Approved => "approved", "Approved",
        Rejected => "rejected", "Rejected",
        Withdrawn => "withdrawn", "Withdrawn",
    }
}

coded_enum! {
    pub enum RequestType {
        EarlyCompletion => "early_completion", "Early Completion",
        EarlyTermination => "early_termination", "Early Termination",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Low => "bg-green-100 text-green-800",
            Urgency::Medium => "bg-yellow-100 text-yellow-800",
            Urgency::High => "bg-orange-100 text-orange-800",
            Urgency::Critical => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestAttributes {
    pub urgency: Urgency,
    pub requested_by: String,
    pub proposed_date: Option<DateTime<Utc>>,
    pub current_end_date: Option<DateTime<Utc>>,
}

pub type EarlyCompletionRequest = LifecycleRecord<EarlyCompletion>;

/// Заявки на досрочное завершение или прекращение занятости
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EarlyCompletion;

use RequestStage as S;

const STAGE_STYLES: &[(RequestStage, StageStyle)] = &[
    (S::Pending, StageStyle::new("bg-yellow-100 text-yellow-800", "clock")),
    (S::UnderReview, StageStyle::new("bg-blue-100 text-blue-800", "eye")),
    (S::Approved, StageStyle::new("bg-green-100 text-green-800", "check-circle")),
    (S::Rejected, StageStyle::new("bg-red-100 text-red-800", "x-circle")),
    (S::Withdrawn, StageStyle::new("bg-gray-100 text-gray-800", "minus")),
];

const TRANSITIONS: &[TransitionRule<RequestStage, NoChecklist>] = &[
    TransitionRule::branch(S::Pending, "start_review", "Start Review", ActionSeverity::Neutral, S::UnderReview, false),
    TransitionRule::forward(S::Pending, "approve", "Accept", S::Approved, None),
    TransitionRule::branch(S::Pending, "reject", "Reject", ActionSeverity::Negative, S::Rejected, true),
    TransitionRule::forward(S::UnderReview, "approve", "Accept", S::Approved, None),
    TransitionRule::branch(S::UnderReview, "reject", "Reject", ActionSeverity::Negative, S::Rejected, true),
];

const AUXILIARY: &[AuxiliaryAction] = &[ADD_NOTE];

impl LifecycleDefinition for EarlyCompletion {
    type Stage = RequestStage;
    type Checklist = NoChecklist;
    type Reason = RequestType;
    type Attributes = RequestAttributes;

    fn index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "early_completion"
    }

    fn element_name() -> &'static str {
        "request"
    }

    fn list_name() -> &'static str {
        "requests"
    }

    fn code_prefix() -> &'static str {
        "ECR"
    }

    fn endpoint() -> &'static str {
        "/api/company/requests/early-completion"
    }

    fn patch_style() -> PatchStyle {
        PatchStyle::Decision
    }

    fn initial_stage() -> RequestStage {
        S::Pending
    }

    fn stage_styles() -> &'static [(RequestStage, StageStyle)] {
        STAGE_STYLES
    }

    fn transitions() -> &'static [TransitionRule<RequestStage, NoChecklist>] {
        TRANSITIONS
    }

    fn auxiliary_actions() -> &'static [AuxiliaryAction] {
        AUXILIARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::{plan_action, TransitionError};

    #[test]
    fn test_reject_requires_reason() {
        let record = EarlyCompletionRequest::new("r-1", "ECR-0001", Default::default());
        assert!(matches!(
            plan_action(&record, "reject", Some("  ")),
            Err(TransitionError::NoteRequired { .. })
        ));
        let plan = plan_action(&record, "reject", Some("Project deadline")).unwrap();
        assert_eq!(plan.next_stage, Some(S::Rejected));
    }

    #[test]
    fn test_approve_without_notes_from_review() {
        let mut record = EarlyCompletionRequest::new("r-1", "ECR-0001", Default::default());
        record.current_stage = S::UnderReview;
        let plan = plan_action(&record, "approve", None).unwrap();
        assert_eq!(plan.next_stage, Some(S::Approved));
    }

    #[test]
    fn test_decided_request_cannot_be_decided_again() {
        let mut record = EarlyCompletionRequest::new("r-1", "ECR-0001", Default::default());
        record.current_stage = S::Approved;
        assert!(matches!(
            plan_action(&record, "reject", Some("late")),
            Err(TransitionError::NotPermitted { .. })
        ));
    }
}
