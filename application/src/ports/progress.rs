//! Progress notification port
//!
//! Defines the interface for reporting a lookup while it is in flight.

use neuralcore_domain::{ToolDescriptor, ToolId};

/// Callback for progress updates during a lookup
///
/// Implementations live in the presentation layer (spinner, plain log, ...).
pub trait LookupProgressNotifier: Send + Sync {
    /// Called once the submission passed validation, before the fetch.
    fn on_lookup_start(&self, descriptor: &ToolDescriptor);

    /// Called when the fetch and adaptation finished.
    fn on_lookup_complete(&self, tool: ToolId, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LookupProgressNotifier for NoProgress {
    fn on_lookup_start(&self, _descriptor: &ToolDescriptor) {}
    fn on_lookup_complete(&self, _tool: ToolId, _success: bool) {}
}
