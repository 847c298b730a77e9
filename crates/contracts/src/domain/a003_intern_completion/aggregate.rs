use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::lifecycle::{
    ActionSeverity, AuxiliaryAction, LifecycleDefinition, LifecycleRecord, PatchStyle,
    StageStyle, TransitionRule, ADD_NOTE, GENERATE_REPORT,
};

coded_enum! {
    /// Стадия штатного завершения стажировки
    pub enum CompletionStage {
        Active => "active", "Active",
        PreCompletion => "pre_completion", "Pre-Completion",
        ProjectReview => "project_review", "Project Review",
        PerformanceEvaluation => "performance_evaluation", "Performance Evaluation",
        ExitInterview => "exit_interview", "Exit Interview",
        DocumentationFinalization => "documentation_finalization", "Documentation Finalization",
        CertificateGeneration => "certificate_generation", "Certificate Generation",
        AlumniNetwork => "alumni_network", "Alumni Network",
        Completed => "completed", "Completed",
        Extended => "extended", "Extended",
    }
}

coded_enum! {
    pub enum CompletionChecklist {
        ProjectReview => "projectReview", "Project Review",
        PerformanceEvaluation => "performanceEvaluation", "Performance Evaluation",
        ExitInterview => "exitInterview", "Exit Interview",
        DocumentationFinalization => "documentationFinalization", "Documentation",
        CertificateGeneration => "certificateGeneration", "Certificate",
        AlumniNetwork => "alumniNetwork", "Alumni Network",
    }
}

coded_enum! {
    pub enum CompletionReason {
        ScheduledEnd => "scheduled_end", "Scheduled End",
        EarlyCompletion => "early_completion", "Early Completion",
        ExtensionEnd => "extension_end", "End of Extension",
        Other => "other", "Other",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionAttributes {
    pub mentor: String,
    pub supervisor: String,
    pub end_date: Option<DateTime<Utc>>,
    pub projects: Vec<String>,
}

pub type CompletingIntern = LifecycleRecord<InternCompletion>;

/// Штатное завершение стажировки
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InternCompletion;

use CompletionChecklist as C;
use CompletionStage as S;

const STAGE_STYLES: &[(CompletionStage, StageStyle)] = &[
    (S::Active, StageStyle::new("bg-green-100 text-green-800", "award")),
    (S::PreCompletion, StageStyle::new("bg-blue-100 text-blue-800", "clock")),
    (S::ProjectReview, StageStyle::new("bg-purple-100 text-purple-800", "presentation")),
    (S::PerformanceEvaluation, StageStyle::new("bg-indigo-100 text-indigo-800", "trophy")),
    (S::ExitInterview, StageStyle::new("bg-cyan-100 text-cyan-800", "message-square")),
    (S::DocumentationFinalization, StageStyle::new("bg-teal-100 text-teal-800", "file-check")),
    (S::CertificateGeneration, StageStyle::new("bg-orange-100 text-orange-800", "certificate")),
    (S::AlumniNetwork, StageStyle::new("bg-amber-100 text-amber-800", "network")),
    (S::Completed, StageStyle::new("bg-emerald-100 text-emerald-800", "target")),
    (S::Extended, StageStyle::new("bg-yellow-100 text-yellow-800", "timer")),
];

const TRANSITIONS: &[TransitionRule<CompletionStage, CompletionChecklist>] = &[
    TransitionRule::forward(S::Active, "start_completion", "Start Completion Process", S::PreCompletion, None),
    TransitionRule::branch(S::Active, "extend_internship", "Extend Internship", ActionSeverity::Neutral, S::Extended, false),
    TransitionRule::branch(S::Extended, "start_completion", "Start Completion Process", ActionSeverity::Positive, S::PreCompletion, false),
    TransitionRule::forward(S::PreCompletion, "review_projects", "Review Projects", S::ProjectReview, None),
    TransitionRule::forward(S::ProjectReview, "conduct_evaluation", "Conduct Evaluation", S::PerformanceEvaluation, Some(C::ProjectReview)),
    TransitionRule::forward(S::PerformanceEvaluation, "schedule_exit_interview", "Schedule Exit Interview", S::ExitInterview, Some(C::PerformanceEvaluation)),
    TransitionRule::forward(S::ExitInterview, "finalize_documentation", "Finalize Documentation", S::DocumentationFinalization, Some(C::ExitInterview)),
    TransitionRule::forward(S::DocumentationFinalization, "generate_certificate", "Generate Certificate", S::CertificateGeneration, Some(C::DocumentationFinalization)),
    TransitionRule::forward(S::CertificateGeneration, "enroll_alumni", "Enroll in Alumni Network", S::AlumniNetwork, Some(C::CertificateGeneration)),
    TransitionRule::forward(S::AlumniNetwork, "complete_internship", "Complete Internship", S::Completed, Some(C::AlumniNetwork)),
];

const AUXILIARY: &[AuxiliaryAction] = &[ADD_NOTE, GENERATE_REPORT];

impl LifecycleDefinition for InternCompletion {
    type Stage = CompletionStage;
    type Checklist = CompletionChecklist;
    type Reason = CompletionReason;
    type Attributes = CompletionAttributes;

    fn index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "intern_completion"
    }

    fn element_name() -> &'static str {
        "intern"
    }

    fn list_name() -> &'static str {
        "completing interns"
    }

    fn code_prefix() -> &'static str {
        "CMP"
    }

    fn endpoint() -> &'static str {
        "/api/company/recruitment/interns/completion"
    }

    fn patch_style() -> PatchStyle {
        PatchStyle::Status
    }

    fn initial_stage() -> CompletionStage {
        S::Active
    }

    fn stage_styles() -> &'static [(CompletionStage, StageStyle)] {
        STAGE_STYLES
    }

    fn transitions() -> &'static [TransitionRule<CompletionStage, CompletionChecklist>] {
        TRANSITIONS
    }

    fn auxiliary_actions() -> &'static [AuxiliaryAction] {
        AUXILIARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::{apply_plan, plan_action};
    use chrono::TimeZone;

    #[test]
    fn test_extended_internship_returns_to_completion() {
        let mut record = CompletingIntern::new("c-1", "CMP-0001", Default::default());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        for action in ["extend_internship", "start_completion", "review_projects"] {
            let plan = plan_action(&record, action, None).unwrap();
            record = apply_plan(&record, &plan, "HR", None, now);
        }

        assert_eq!(record.current_stage, S::ProjectReview);
        assert_eq!(record.notes.len(), 3);
        assert_eq!(record.notes[0].to_stage.as_deref(), Some("extended"));
    }
}
