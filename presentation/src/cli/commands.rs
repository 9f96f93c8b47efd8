//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use neuralcore_domain::{OutputFormat, ToolId, VisualMode};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Colored cards, one per result
    Card,
    /// JSON document
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Card => OutputFormat::Card,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Sub-mode of the vision command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VisualModeArg {
    /// Extract text from the image
    Ocr,
    /// Isolate the subject and drop the background
    BgRemove,
}

impl From<VisualModeArg> for VisualMode {
    fn from(arg: VisualModeArg) -> Self {
        match arg {
            VisualModeArg::Ocr => VisualMode::Ocr,
            VisualModeArg::BgRemove => VisualMode::BackgroundRemoval,
        }
    }
}

/// CLI arguments for neuralcore
#[derive(Parser, Debug)]
#[command(name = "neuralcore")]
#[command(author, version, about = "NeuralCore - grounded lookups for Indian business and social data")]
#[command(long_about = r#"
NeuralCore is a hub of lookup agents. Each tool validates its input, fetches
from an external service, and renders a result card with its sources.

Tools:
  gst        GST number to company registry details
  ifsc       IFSC code to bank branch details
  profile    Instagram handle to public profile summary
  trends     Topic to five trending stories with creator hooks
  vision     Image to extracted text, or to a background-free PNG

Without a subcommand an interactive hub session starts.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./neuralcore.toml   Project-level config
3. ~/.config/neuralcore/config.toml   Global config
Environment variables prefixed with NEURALCORE_ override all files.

Example:
  neuralcore gst 29ABCDE1234F1Z5
  neuralcore ifsc SBIN0000001 --output json
  neuralcore vision receipt.jpg --mode ocr
  neuralcore vision portrait.png --mode bg-remove --save cutout.png
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then card)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

/// One-shot lookups
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a company by its 15-character GST number
    Gst {
        /// GST identification number
        gstin: String,
    },
    /// Look up a bank branch by its 11-character IFSC code
    Ifsc {
        /// IFSC code (case-insensitive)
        code: String,
    },
    /// Summarize a public Instagram profile
    Profile {
        /// Handle, with or without the leading @
        handle: String,
    },
    /// Five trending stories for a topic
    Trends {
        /// Topic to search for
        topic: String,
    },
    /// Run text extraction or background removal on an image file
    Vision {
        /// Image file (png, jpg, webp, gif, heic)
        path: PathBuf,

        /// What to do with the image
        #[arg(short, long, value_enum, default_value = "ocr")]
        mode: VisualModeArg,

        /// Write the processed PNG here (background removal only)
        #[arg(long, value_name = "PNG")]
        save: Option<PathBuf>,
    },
    /// List the available tools
    Catalog,
}

impl Command {
    /// Tool this command drives, `None` for the catalog listing.
    pub fn tool(&self) -> Option<ToolId> {
        match self {
            Command::Gst { .. } => Some(ToolId::Gst),
            Command::Ifsc { .. } => Some(ToolId::Ifsc),
            Command::Profile { .. } => Some(ToolId::Instagram),
            Command::Trends { .. } => Some(ToolId::News),
            Command::Vision { .. } => Some(ToolId::Visual),
            Command::Catalog => None,
        }
    }
}
