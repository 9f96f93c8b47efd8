//! Completion gateway port
//!
//! Defines the interface to the generative completion service, used by the
//! company, profile and trend tools (structured) and the image tool (multimodal).

use async_trait::async_trait;
use neuralcore_domain::{DataUrl, LookupPrompt, StructuredReply, VisualMode, VisualOutput};
use thiserror::Error;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Completion service not configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to the completion service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send an instruction with a declared output schema and search grounding.
    async fn structured(&self, prompt: &LookupPrompt) -> Result<StructuredReply, GatewayError>;

    /// Send an image with the instruction for `mode`.
    async fn multimodal(
        &self,
        image: &DataUrl,
        mode: VisualMode,
    ) -> Result<VisualOutput, GatewayError>;
}
