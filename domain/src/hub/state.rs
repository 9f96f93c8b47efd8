//! Hub state machine (Entity)

use crate::core::error::LookupError;
use crate::record::slots::{RecordView, ResultSlots, ToolRecord};
use crate::record::visual::VisualMode;
use crate::tool::id::ToolId;
use crate::tool::registry::ToolRegistry;
use thiserror::Error;

/// Identifies one accepted submission.
///
/// Sequence numbers are per tool and strictly increasing, so a completion
/// can tell whether a newer submission for the same tool has started since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket {
    tool: ToolId,
    seq: u64,
}

impl SubmissionTicket {
    pub fn tool(&self) -> ToolId {
        self.tool
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// An accepted submission, ready to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: SubmissionTicket,
    pub query: String,
    pub mode: VisualMode,
}

/// Why a transition was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no tool selected")]
    NoActiveTool,

    #[error("a request is already in flight")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] LookupError),
}

/// Outcome of feeding a fetch result back into the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The record was stored in its tool's slot.
    Stored(ToolId),
    /// The submission failed; the message was recorded if the tool is still active.
    Failed { tool: ToolId, message: String },
    /// A newer submission for the same tool exists; nothing changed.
    Stale(SubmissionTicket),
}

/// Orchestration state for one session
///
/// `active == None` is the catalog (`Idle`) state. The error and in-flight
/// flag belong to the active tool only and are reset on every switch.
#[derive(Debug, Clone, Default)]
pub struct HubState {
    active: Option<ToolId>,
    input: String,
    visual_mode: VisualMode,
    pending: Option<SubmissionTicket>,
    error: Option<String>,
    results: ResultSlots,
    latest: [u64; ToolId::ALL.len()],
}

fn slot_index(tool: ToolId) -> usize {
    match tool {
        ToolId::Gst => 0,
        ToolId::Ifsc => 1,
        ToolId::Instagram => 2,
        ToolId::News => 3,
        ToolId::Visual => 4,
    }
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn active(&self) -> Option<ToolId> {
        self.active
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn visual_mode(&self) -> VisualMode {
        self.visual_mode
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &ResultSlots {
        &self.results
    }

    /// Stored result of the active tool.
    pub fn active_result(&self) -> Option<RecordView<'_>> {
        self.active.and_then(|tool| self.results.get(tool))
    }

    /// True when a tool is active with nothing stored, no error and no request running.
    pub fn is_idle(&self) -> bool {
        self.active.is_some()
            && self.active_result().is_none()
            && self.error.is_none()
            && !self.in_flight()
    }

    // ==================== Transitions ====================

    /// Activate `tool` with a fresh input. Stored results are kept.
    pub fn select(&mut self, tool: ToolId) {
        self.active = Some(tool);
        self.reset_session_fields();
    }

    /// Return to the catalog, discarding input and error.
    pub fn back_to_catalog(&mut self) {
        self.active = None;
        self.reset_session_fields();
    }

    /// Replace the input text. Refused while a request is in flight.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), Rejection> {
        if self.in_flight() {
            return Err(Rejection::InFlight);
        }
        self.input = text.into();
        Ok(())
    }

    pub fn set_visual_mode(&mut self, mode: VisualMode) -> Result<(), Rejection> {
        if self.in_flight() {
            return Err(Rejection::InFlight);
        }
        self.visual_mode = mode;
        Ok(())
    }

    /// Validate the current input and, if it passes, enter in-flight.
    ///
    /// On acceptance the active tool's slot is cleared and a new ticket is
    /// issued. A format rejection is recorded as the current error.
    pub fn begin_submission(&mut self) -> Result<Submission, Rejection> {
        let tool = self.active.ok_or(Rejection::NoActiveTool)?;
        if self.in_flight() {
            return Err(Rejection::InFlight);
        }

        let descriptor = ToolRegistry::descriptor(tool);
        if !descriptor.validate(&self.input) {
            let err = LookupError::InputFormat {
                tool_title: descriptor.title,
            };
            self.error = Some(err.user_message());
            return Err(err.into());
        }

        let idx = slot_index(tool);
        self.latest[idx] += 1;
        let ticket = SubmissionTicket {
            tool,
            seq: self.latest[idx],
        };

        self.error = None;
        self.results.clear(tool);
        self.pending = Some(ticket);

        Ok(Submission {
            ticket,
            query: self.input.clone(),
            mode: self.visual_mode,
        })
    }

    /// Commit the outcome of the submission identified by `ticket`.
    ///
    /// Only the latest ticket for a tool may write that tool's slot. The
    /// in-flight flag clears when the completion matches the pending ticket.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<ToolRecord, LookupError>,
    ) -> Completion {
        let tool = ticket.tool;
        if self.latest[slot_index(tool)] != ticket.seq {
            return Completion::Stale(ticket);
        }
        if self.pending == Some(ticket) {
            self.pending = None;
        }

        match outcome {
            Ok(record) if record.tool_id() == tool => {
                self.results.store(record);
                Completion::Stored(tool)
            }
            Ok(record) => self.fail(
                tool,
                LookupError::transient(format!(
                    "{} record delivered for {} submission",
                    record.tool_id(),
                    tool
                )),
            ),
            Err(err) => self.fail(tool, err),
        }
    }

    fn fail(&mut self, tool: ToolId, err: LookupError) -> Completion {
        let message = err.user_message();
        if self.active == Some(tool) {
            self.error = Some(message.clone());
        }
        Completion::Failed { tool, message }
    }

    fn reset_session_fields(&mut self) {
        self.input.clear();
        self.error = None;
        self.pending = None;
    }
}
