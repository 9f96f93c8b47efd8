//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod registry;
mod repl;

pub use gemini::{DEFAULT_API_KEY_ENV, FileGeminiConfig};
pub use output::FileOutputConfig;
pub use registry::FileRegistryConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be empty")]
    EmptyModelName { field: &'static str },

    #[error("{field} cannot be empty")]
    EmptyBaseUrl { field: &'static str },

    #[error("{field} must start with http:// or https:// (got '{value}')")]
    InvalidBaseUrl { field: &'static str, value: String },

    #[error("{field} cannot be empty when set")]
    EmptyPath { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub gemini: FileGeminiConfig,
    /// Bank branch registry settings
    pub registry: FileRegistryConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, model) in [
            ("gemini.text_model", &self.gemini.text_model),
            ("gemini.image_model", &self.gemini.image_model),
        ] {
            if model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName { field });
            }
        }

        for (field, url) in [
            ("gemini.base_url", &self.gemini.base_url),
            ("registry.base_url", &self.registry.base_url),
        ] {
            check_base_url(field, url)?;
        }

        for (field, path) in [
            ("repl.history_file", &self.repl.history_file),
            ("repl.save_path", &self.repl.save_path),
        ] {
            if path.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(ConfigValidationError::EmptyPath { field });
            }
        }

        Ok(())
    }
}

fn check_base_url(field: &'static str, url: &str) -> Result<(), ConfigValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigValidationError::EmptyBaseUrl { field });
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigValidationError::InvalidBaseUrl {
            field,
            value: url.to_string(),
        });
    }
    Ok(())
}
