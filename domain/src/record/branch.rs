//! Bank branch record (IFSC lookup)

use serde::{Deserialize, Serialize};

/// Branch details for one routing code
///
/// `contact` and `micr` hold [`NOT_AVAILABLE`](super::NOT_AVAILABLE) when the
/// registry omits them; they are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRecord {
    /// Routing code, uppercased.
    pub ifsc: String,
    pub bank_name: String,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub micr: String,
}
