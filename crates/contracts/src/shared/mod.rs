pub mod api;
pub mod lifecycle;
