//! Port definitions (interfaces for external adapters)

pub mod branch_registry;
pub mod completion;
pub mod image_source;
pub mod progress;
