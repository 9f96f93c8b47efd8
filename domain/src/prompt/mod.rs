//! Prompt domain
//!
//! Instructions and declared output schemas for the completion service.

mod schema;
mod template;

pub use schema::{FieldType, OutputSchema, SchemaField};
pub use template::LookupPrompt;
