//! Tool domain module
//!
//! This module defines the closed catalog of lookup agents the hub can drive.
//!
//! # Overview
//!
//! Every tool is identified by a [`ToolId`] and described by a static
//! [`ToolDescriptor`] that pairs its display metadata with an input
//! [`InputFormat`] and the fetch route it uses:
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌──────────────┐
//! │ ToolId       │───▶│ ToolDescriptor │───▶│ InputFormat  │
//! │ (closed set) │    │ (registry)     │    │ (validator)  │
//! └──────────────┘    └───────┬────────┘    └──────────────┘
//!                             │
//!                             └─ fetch: StructuredCompletion | RegistryLookup | none
//! ```
//!
//! # Fetch routes
//!
//! | Tool | Route | External service |
//! |------|-------|------------------|
//! | `gst` | StructuredCompletion | Gemini + search grounding |
//! | `ifsc` | RegistryLookup | Razorpay IFSC registry |
//! | `instagram` | StructuredCompletion | Gemini + search grounding |
//! | `news` | StructuredCompletion | Gemini + search grounding |
//! | `visual` | *(none)* | Gemini multimodal, driven by the visual mode |
//!
//! Consumers match on [`ToolId`] exhaustively; there is no open-ended lookup
//! by string once input has been parsed.

pub mod descriptor;
pub mod id;
pub mod registry;
pub mod validator;

pub use descriptor::{FetchRoute, ToolDescriptor};
pub use id::{ToolCategory, ToolId};
pub use registry::ToolRegistry;
pub use validator::InputFormat;
