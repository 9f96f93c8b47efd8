//! Company registry record (GST lookup)

use serde::{Deserialize, Serialize};

/// Registration status reported for a GSTIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GstStatus {
    Active,
    Inactive,
    Cancelled,
    /// Anything else the service reported, kept verbatim.
    Other(String),
}

impl GstStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GstStatus::Active => "Active",
            GstStatus::Inactive => "Inactive",
            GstStatus::Cancelled => "Cancelled",
            GstStatus::Other(s) => s,
        }
    }
}

impl Default for GstStatus {
    fn default() -> Self {
        GstStatus::Other(String::new())
    }
}

impl From<String> for GstStatus {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => GstStatus::Active,
            "inactive" => GstStatus::Inactive,
            "cancelled" | "canceled" => GstStatus::Cancelled,
            _ => GstStatus::Other(s),
        }
    }
}

impl From<GstStatus> for String {
    fn from(status: GstStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for GstStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Company details for one GSTIN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// The identifier exactly as the user typed it.
    pub gst_number: String,
    pub legal_name: String,
    /// `N/A` when the business has no separate trade name.
    pub trade_name: String,
    pub constitution_of_business: String,
    pub registration_date: String,
    pub taxpayer_type: String,
    pub gst_status: GstStatus,
    pub center_jurisdiction: String,
    pub state_jurisdiction: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(GstStatus::from("ACTIVE".to_string()), GstStatus::Active);
        assert_eq!(GstStatus::from("Canceled".to_string()), GstStatus::Cancelled);
        assert_eq!(
            GstStatus::from("Suspended".to_string()),
            GstStatus::Other("Suspended".into())
        );
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&GstStatus::Inactive).unwrap();
        assert_eq!(json, "\"Inactive\"");
        let back: GstStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(back, GstStatus::Active);
    }
}
