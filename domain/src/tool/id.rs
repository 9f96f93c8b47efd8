//! Tool identifier and category value objects

use serde::{Deserialize, Serialize};

/// Identifier of one of the five lookup agents (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Company registry lookup by GST identifier
    Gst,
    /// Bank branch lookup by IFSC routing code
    Ifsc,
    /// Public social profile lookup
    Instagram,
    /// Trending topic digest
    News,
    /// Image text extraction / background removal
    Visual,
}

impl ToolId {
    /// Every tool, in catalog order.
    pub const ALL: [ToolId; 5] = [
        ToolId::Gst,
        ToolId::Ifsc,
        ToolId::Instagram,
        ToolId::News,
        ToolId::Visual,
    ];

    /// Get the string identifier for this tool
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Gst => "gst",
            ToolId::Ifsc => "ifsc",
            ToolId::Instagram => "instagram",
            ToolId::News => "news",
            ToolId::Visual => "visual",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gst" => Ok(ToolId::Gst),
            "ifsc" => Ok(ToolId::Ifsc),
            "instagram" | "profile" | "social" => Ok(ToolId::Instagram),
            "news" | "trends" | "pulse" => Ok(ToolId::News),
            "visual" | "vision" => Ok(ToolId::Visual),
            other => Err(format!(
                "unknown tool '{}' (expected one of: gst, ifsc, instagram, news, visual)",
                other
            )),
        }
    }
}

/// Catalog section a tool is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Finance,
    Social,
    Vision,
}

impl ToolCategory {
    /// Every category, in display order.
    pub const ALL: [ToolCategory; 3] = [
        ToolCategory::Finance,
        ToolCategory::Social,
        ToolCategory::Vision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Finance => "Finance",
            ToolCategory::Social => "Social",
            ToolCategory::Vision => "Vision",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
