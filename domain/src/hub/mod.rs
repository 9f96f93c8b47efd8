//! Hub orchestration state
//!
//! The hub is a session-lived state machine: `Idle` (catalog) or one active
//! tool with its input, error and in-flight flag. Results live in per-tool
//! slots that survive tool switches.

pub mod state;

pub use state::{Completion, HubState, Rejection, Submission, SubmissionTicket};
