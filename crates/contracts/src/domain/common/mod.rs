//! Common types shared by all lifecycle kinds

pub mod entity_metadata;

// Re-exports
pub use entity_metadata::EntityMetadata;
