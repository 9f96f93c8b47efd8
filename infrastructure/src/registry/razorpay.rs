//! Razorpay IFSC registry client
//!
//! `GET {base_url}/{CODE}` returns a flat JSON object with uppercase keys.
//! 404 means the code is unknown; any other non-success status is reported
//! as the registry being unavailable.

use async_trait::async_trait;
use neuralcore_application::{BranchRegistryPort, RegistryError};
use neuralcore_domain::{BranchRecord, Grounded, GroundingSource, NOT_AVAILABLE};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

const SOURCE_TITLE: &str = "Razorpay Records";
const SOURCE_URI: &str = "https://razorpay.com";

/// Registry response body (only the fields neuralcore reads)
///
/// Every field may be `null` in practice.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
struct BranchReply {
    ifsc: Option<String>,
    bank: Option<String>,
    branch: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    contact: Option<String>,
    micr: Option<String>,
}

impl BranchReply {
    fn into_record(self, code: &str) -> BranchRecord {
        BranchRecord {
            ifsc: self
                .ifsc
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| code.to_string()),
            bank_name: self.bank.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            contact: or_not_available(self.contact),
            micr: or_not_available(self.micr),
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parse a success body into a grounded record.
fn parse_branch(body: &str, code: &str) -> Result<Grounded<BranchRecord>, RegistryError> {
    let reply: BranchReply =
        serde_json::from_str(body).map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;
    Ok(Grounded::new(
        reply.into_record(code),
        vec![GroundingSource::new(SOURCE_TITLE, SOURCE_URI)],
    ))
}

fn classify_status(status: StatusCode) -> RegistryError {
    if status == StatusCode::NOT_FOUND {
        RegistryError::NotFound
    } else {
        RegistryError::Unavailable {
            status: status.as_u16(),
        }
    }
}

/// Branch registry backed by `ifsc.razorpay.com`
pub struct RazorpayBranchRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl RazorpayBranchRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code.to_uppercase())
    }
}

#[async_trait]
impl BranchRegistryPort for RazorpayBranchRegistry {
    async fn lookup(&self, code: &str) -> Result<Grounded<BranchRecord>, RegistryError> {
        let url = self.url(code);
        debug!(url = %url, "IFSC registry request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;
        parse_branch(&body, &code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HDFC: &str = r#"{
        "MICR": "400240015",
        "BRANCH": "SANDOZ HOUSE",
        "ADDRESS": "SANDOZ HOUSE, DR ANNIE BESANT ROAD, WORLI",
        "STATE": "MAHARASHTRA",
        "CONTACT": "",
        "UPI": true,
        "RTGS": true,
        "CITY": "MUMBAI",
        "CENTRE": "MUMBAI",
        "DISTRICT": "MUMBAI",
        "NEFT": true,
        "IMPS": true,
        "SWIFT": null,
        "BANK": "HDFC Bank",
        "BANKCODE": "HDFC",
        "IFSC": "HDFC0000240"
    }"#;

    #[test]
    fn test_parse_maps_fields_and_source() {
        let grounded = parse_branch(HDFC, "HDFC0000240").unwrap();
        let record = &grounded.data;
        assert_eq!(record.bank_name, "HDFC Bank");
        assert_eq!(record.branch, "SANDOZ HOUSE");
        assert_eq!(record.city, "MUMBAI");
        assert_eq!(record.micr, "400240015");
        assert_eq!(
            grounded.sources,
            vec![GroundingSource::new("Razorpay Records", "https://razorpay.com")]
        );
    }

    #[test]
    fn test_empty_contact_becomes_placeholder() {
        let grounded = parse_branch(HDFC, "HDFC0000240").unwrap();
        assert_eq!(grounded.data.contact, "N/A");
    }

    #[test]
    fn test_absent_optional_fields_become_placeholder() {
        let body = r#"{"BANK": "State Bank of India", "BRANCH": "Main", "ADDRESS": null, "IFSC": "SBIN0000001"}"#;
        let grounded = parse_branch(body, "SBIN0000001").unwrap();
        assert_eq!(grounded.data.contact, "N/A");
        assert_eq!(grounded.data.micr, "N/A");
        assert_eq!(grounded.data.address, "");
    }

    #[test]
    fn test_missing_ifsc_falls_back_to_code() {
        let grounded = parse_branch(r#"{"BANK": "X"}"#, "ABCD0123456").unwrap();
        assert_eq!(grounded.data.ifsc, "ABCD0123456");
    }

    #[test]
    fn test_parse_error_is_invalid_response() {
        assert!(matches!(
            parse_branch("\"Not Found\"", "X"),
            Err(RegistryError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND),
            RegistryError::NotFound
        ));
        assert!(matches!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE),
            RegistryError::Unavailable { status: 503 }
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST),
            RegistryError::Unavailable { status: 400 }
        ));
    }

    #[test]
    fn test_url_uppercases_code() {
        let registry = RazorpayBranchRegistry::new("https://ifsc.razorpay.com/");
        assert_eq!(registry.url("hdfc0000240"), "https://ifsc.razorpay.com/HDFC0000240");
    }
}
