//! Presentation layer for neuralcore
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive hub REPL.

pub mod cli;
pub mod config;
pub mod hub;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputArg, VisualModeArg};
pub use config::{OutputConfig, ReplConfig};
pub use hub::{HubCommand, HubRepl};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, progress_for};
