//! Infrastructure layer for neuralcore
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod media;
pub mod registry;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileRegistryConfig, FileReplConfig,
};
pub use gemini::{GeminiConfig, GeminiError, GeminiGateway};
pub use media::LocalImageSource;
pub use registry::RazorpayBranchRegistry;
