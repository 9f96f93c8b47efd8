//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished record is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tool-specific card (default)
    #[default]
    Card,
    /// Grounded record as JSON
    Json,
}
