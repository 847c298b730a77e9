use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_employee_closure::{
    ClosedEmployee, ClosureAttributes, ClosureCategory, ClosureChecklist as C, ClosureReason,
    ClosureStage as S, EmployeeClosure,
};
use contracts::shared::lifecycle::CodedVariant;

use crate::domain::lifecycle::seed::{person, DemoData, DemoRecord};

impl DemoData for EmployeeClosure {
    fn demo_records(now: DateTime<Utc>) -> Vec<ClosedEmployee> {
        let anna = person("Anna Schmidt", "Backend Developer", "Engineering", "Platform Team");
        let marco = person("Marco Rossi", "Account Manager", "Sales", "Key Accounts");
        let lena = person("Lena Fischer", "Office Manager", "Operations", "Berlin Office");
        let tomas = person("Tomas Novak", "QA Engineer", "Engineering", "Mobile Team");

        vec![
            DemoRecord::new(1, anna, now, 3)
                .reason(ClosureReason::Resignation, "employee", "Relocating abroad")
                .attributes(ClosureAttributes {
                    closure_category: ClosureCategory::Voluntary,
                    rehire_eligible: true,
                    last_working_day: Some(now + Duration::days(25)),
                })
                .build(),
            DemoRecord::new(2, marco, now, 21)
                .stage(S::EquipmentReturn)
                .done(&[C::KnowledgeTransfer])
                .reason(ClosureReason::EndOfContract, "company", "Fixed-term contract ends")
                .attributes(ClosureAttributes {
                    closure_category: ClosureCategory::Neutral,
                    rehire_eligible: true,
                    last_working_day: Some(now + Duration::days(4)),
                })
                .note("HR Team", "Handover plan agreed with the team lead")
                .build(),
            DemoRecord::new(3, lena, now, 40)
                .stage(S::ExitInterview)
                .done(&[
                    C::KnowledgeTransfer,
                    C::EquipmentReturn,
                    C::AccessRevocation,
                    C::FinalSettlement,
                ])
                .reason(ClosureReason::Retirement, "employee", "")
                .attributes(ClosureAttributes {
                    closure_category: ClosureCategory::Voluntary,
                    rehire_eligible: false,
                    last_working_day: Some(now - Duration::days(2)),
                })
                .build(),
            DemoRecord::new(4, tomas, now, 75)
                .stage(S::Closed)
                .done(C::all())
                .reason(ClosureReason::Layoff, "company", "Mobile team restructuring")
                .attributes(ClosureAttributes {
                    closure_category: ClosureCategory::Involuntary,
                    rehire_eligible: true,
                    last_working_day: Some(now - Duration::days(30)),
                })
                .build(),
        ]
    }
}
