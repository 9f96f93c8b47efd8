//! Interactive hub session
//!
//! A line-oriented front end over [`HubController`](neuralcore_application::HubController):
//! slash commands switch tools and modes, any other line is the active tool's input.

pub mod command;
pub mod repl;

pub use command::{CommandError, DEFAULT_SAVE_PATH, HubCommand};
pub use repl::HubRepl;
