//! Input format validators
//!
//! Pure predicates run before any network call. A rejected input blocks the
//! submission; the hub turns it into [`LookupError::InputFormat`](crate::LookupError).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// 15-character Indian GST identifier: state code, PAN, entity number, `Z`, checksum.
static GST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GST regex")
});

/// 11-character IFSC: bank code, literal `0`, branch code.
static ROUTING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid IFSC regex"));

/// Accepted shape of a tool's raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// GST identifier, matched case-insensitively
    GstIdentifier,
    /// Bank routing code (IFSC), matched case-insensitively
    RoutingCode,
    /// Profile handle, more than one non-blank character
    Handle,
    /// Free-text topic, more than two non-blank characters
    Topic,
    /// Image payload (data URL), non-empty
    ImagePayload,
}

impl InputFormat {
    /// Check `raw` against this format. No side effects.
    pub fn validate(&self, raw: &str) -> bool {
        match self {
            InputFormat::GstIdentifier => GST_PATTERN.is_match(&raw.to_uppercase()),
            InputFormat::RoutingCode => ROUTING_PATTERN.is_match(&raw.to_uppercase()),
            InputFormat::Handle => raw.trim().chars().count() > 1,
            InputFormat::Topic => raw.trim().chars().count() > 2,
            InputFormat::ImagePayload => !raw.is_empty(),
        }
    }

    /// Short human description, used in help text.
    pub fn describe(&self) -> &'static str {
        match self {
            InputFormat::GstIdentifier => "15-character GSTIN, e.g. 29ABCDE1234F1Z5",
            InputFormat::RoutingCode => "11-character IFSC, e.g. HDFC0001234",
            InputFormat::Handle => "profile handle, e.g. @natgeo",
            InputFormat::Topic => "topic of at least three characters",
            InputFormat::ImagePayload => "path to an image file",
        }
    }
}
