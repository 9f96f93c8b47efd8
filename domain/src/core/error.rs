//! Domain error types
//!
//! [`LookupError`] is the taxonomy every submission failure is folded into
//! before it reaches the user. Its `Display` output *is* the user-facing
//! message; internal causes are kept on the variant for logging only.

use crate::tool::id::ToolId;
use thiserror::Error;

/// Message shown for any failure without a more specific classification.
pub const SYNC_TIMEOUT_MESSAGE: &str =
    "Sync Timeout: Neural core failed to resolve grounding signals.";

/// Submission errors, as seen by the hub.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Validator rejected the input; no network call was made.
    #[error("Format Mismatch: Please check the {tool_title} input protocol.")]
    InputFormat { tool_title: &'static str },

    /// The registry does not know the routing code.
    #[error("Invalid IFSC node signature.")]
    NotFound,

    /// The registry answered with a non-success status other than 404.
    #[error("IFSC network unavailable.")]
    Unavailable { status: u16 },

    /// Transport failure, unclassified status or malformed response.
    #[error("Sync Timeout: Neural core failed to resolve grounding signals.")]
    Transient { cause: String },
}

impl LookupError {
    /// Build a transient error, keeping the cause for diagnostics.
    pub fn transient(cause: impl Into<String>) -> Self {
        Self::Transient {
            cause: cause.into(),
        }
    }

    /// The message the user sees.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True if the user can fix the problem by changing the input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InputFormat { .. } | Self::NotFound)
    }

    /// Internal cause, if any (never shown to the user).
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Transient { cause } => Some(cause),
            _ => None,
        }
    }
}

/// Errors raised while reshaping a raw service response into a record.
#[derive(Error, Debug)]
pub enum AdaptError {
    #[error("malformed {tool} response: {source}")]
    Malformed {
        tool: ToolId,
        #[source]
        source: serde_json::Error,
    },

    #[error("{tool} cannot be built from a {got} response")]
    ShapeMismatch { tool: ToolId, got: &'static str },
}

impl From<AdaptError> for LookupError {
    fn from(e: AdaptError) -> Self {
        LookupError::transient(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_message_names_tool() {
        let error = LookupError::InputFormat {
            tool_title: "GST Insight",
        };
        assert_eq!(
            error.user_message(),
            "Format Mismatch: Please check the GST Insight input protocol."
        );
    }

    #[test]
    fn test_transient_hides_cause() {
        let error = LookupError::transient("connection reset by peer");
        assert_eq!(error.user_message(), SYNC_TIMEOUT_MESSAGE);
        assert_eq!(error.cause(), Some("connection reset by peer"));
    }

    #[test]
    fn test_not_found_is_distinct_from_fallback() {
        assert_eq!(LookupError::NotFound.user_message(), "Invalid IFSC node signature.");
        assert_ne!(LookupError::NotFound.user_message(), SYNC_TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_user_correctable() {
        assert!(LookupError::NotFound.is_user_correctable());
        assert!(LookupError::InputFormat { tool_title: "x" }.is_user_correctable());
        assert!(!LookupError::Unavailable { status: 503 }.is_user_correctable());
        assert!(!LookupError::transient("x").is_user_correctable());
    }

    #[test]
    fn test_adapt_error_becomes_transient() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: LookupError = AdaptError::Malformed {
            tool: ToolId::Gst,
            source,
        }
        .into();
        assert!(matches!(error, LookupError::Transient { .. }));
        assert!(error.cause().unwrap().contains("gst"));
    }
}
