//! Gemini `generateContent` adapter
//!
//! Implements [`CompletionGateway`](neuralcore_application::CompletionGateway)
//! over the public REST API: structured lookups with search grounding and the
//! two multimodal image modes.

pub mod error;
pub mod gateway;
pub mod schema;
pub mod types;

pub use error::GeminiError;
pub use gateway::{GeminiConfig, GeminiGateway};
