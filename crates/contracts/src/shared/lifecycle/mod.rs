//! Общий конечный автомат жизненного цикла с чек-листом.
//!
//! Вид процесса описывается реализацией [`LifecycleDefinition`]; каталог стадий,
//! прогресс, набор действий и проверка переходов работают для любого вида.

pub mod actions;
pub mod catalog;
pub mod definition;
pub mod progress;
pub mod record;
pub mod request;
pub mod transition;

pub use actions::{
    ActionKind, ActionResolver, ActionSeverity, AuxiliaryAction, LifecycleAction, ADD_NOTE,
    GENERATE_REPORT,
};
pub use catalog::{StageStyle, StatusCatalog, UNKNOWN_STAGE_STYLE};
pub use definition::{CodedVariant, LifecycleDefinition};
pub use progress::{ChecklistProgress, ChecklistRow, NoChecklist};
pub use record::{AuditNote, ChecklistEntry, LifecycleRecord, ReasonInfo, SubjectInfo};
pub use request::{ActionRequest, PatchStyle};
pub use transition::{apply_plan, plan_action, ActionPlan, TransitionError, TransitionRule};

/// Объявляет закрытый перечень значений с кодами и подписями.
///
/// ```ignore
/// coded_enum! {
///     pub enum Stage {
///         Initiated => "initiated", "Initiated",
///         Closed => "closed", "Closed",
///     }
/// }
/// ```
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $code:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( #[serde(rename = $code)] $variant, )+
        }

        impl $crate::shared::lifecycle::CodedVariant for $name {
            fn all() -> &'static [Self] {
                &[ $( $name::$variant, )+ ]
            }

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }
    };
}
