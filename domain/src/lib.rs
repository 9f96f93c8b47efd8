//! Domain layer for neuralcore
//!
//! This crate contains the tool catalog, input validators, result records,
//! response adapters and the hub state machine. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A closed set of five lookup agents ([`ToolId`]). Each one is described by a
//! static [`ToolDescriptor`] in the [`ToolRegistry`]:
//!
//! - **Finance**: `gst` (company registry), `ifsc` (bank branch registry)
//! - **Social**: `instagram` (profile lookup), `news` (trend digest)
//! - **Vision**: `visual` (text extraction / background removal)
//!
//! ## Submission flow
//!
//! ```text
//! input ──▶ InputFormat::validate ──▶ fetch (application port) ──▶ adapter::adapt ──▶ ResultSlots
//! ```
//!
//! The [`HubState`] tracks which tool is active and owns the per-tool result slots.

pub mod config;
pub mod core;
pub mod hub;
pub mod media;
pub mod prompt;
pub mod record;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::{AdaptError, LookupError, SYNC_TIMEOUT_MESSAGE};
pub use hub::state::{Completion, HubState, Rejection, Submission, SubmissionTicket};
pub use media::{DataUrl, DataUrlError};
pub use prompt::{FieldType, LookupPrompt, OutputSchema, SchemaField};
pub use record::{
    adapter::{RawResponse, StructuredReply, VisualOutput, adapt, strip_handle},
    branch::BranchRecord,
    company::{CompanyRecord, GstStatus},
    grounding::{GroundingSource, Grounded},
    profile::ProfileRecord,
    slots::{RecordView, ResultSlots, ToolRecord},
    trend::{TrendDigest, TrendItem},
    visual::{NO_TEXT_DETECTED, VisualMode, VisualRecord},
    NOT_AVAILABLE,
};
pub use tool::{
    descriptor::{FetchRoute, ToolDescriptor},
    id::{ToolCategory, ToolId},
    registry::ToolRegistry,
    validator::InputFormat,
};
