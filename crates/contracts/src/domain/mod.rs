pub mod a001_employee_closure;
pub mod a002_intern_termination;
pub mod a003_intern_completion;
pub mod a004_talent_track;
pub mod a005_early_completion;
pub mod common;
