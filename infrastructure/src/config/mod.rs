//! Configuration file loading for neuralcore
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEURALCORE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./neuralcore.toml` or `./.neuralcore.toml`
//! 4. Global: `$XDG_CONFIG_HOME/neuralcore/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileRegistryConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
