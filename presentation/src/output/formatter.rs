//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use neuralcore_domain::{OutputFormat, RecordView, ToolDescriptor, ToolId};

/// Renders hub state for the terminal
pub trait OutputFormatter: Send + Sync {
    /// A stored record for the active tool
    fn record(&self, view: RecordView<'_>) -> String;

    /// A failed submission; `message` is already user-facing
    fn failure(&self, tool: ToolId, message: &str) -> String;

    /// The placeholder shown when a tool has no result yet
    fn idle(&self, descriptor: &ToolDescriptor) -> String;

    /// The tool catalog, grouped by category
    fn catalog(&self) -> String;
}

/// Formatter for the configured output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Card => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
