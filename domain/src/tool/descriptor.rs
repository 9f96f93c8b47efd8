//! Tool descriptor entity

use super::id::{ToolCategory, ToolId};
use super::validator::InputFormat;

/// External integration a tool's submission is routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRoute {
    /// Prompt + declared JSON schema to the completion service, search grounding on
    StructuredCompletion,
    /// Direct GET against the bank branch registry
    RegistryLookup,
}

/// Static description of one tool
///
/// Descriptors live in [`ToolRegistry`](super::registry::ToolRegistry) and are
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub category: ToolCategory,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub description: &'static str,
    /// Typical response time, for display only.
    pub latency_hint: &'static str,
    pub input_format: InputFormat,
    /// `None` for tools triggered through the multimodal path.
    pub fetch: Option<FetchRoute>,
}

impl ToolDescriptor {
    /// Run this tool's validator on `raw`.
    pub fn validate(&self, raw: &str) -> bool {
        self.input_format.validate(raw)
    }
}
