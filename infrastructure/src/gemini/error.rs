//! Error types for the Gemini adapter

use neuralcore_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("No API key configured (set GEMINI_API_KEY or gemini.api_key)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt blocked: {0}")]
    Blocked(String),
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey => GatewayError::NotConfigured(e.to_string()),
            GeminiError::Http(err) => GatewayError::ConnectionError(err.to_string()),
            GeminiError::Status { status, body } => GatewayError::RequestFailed {
                status,
                message: body,
            },
            other => GatewayError::InvalidResponse(other.to_string()),
        }
    }
}
