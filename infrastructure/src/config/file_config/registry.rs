//! Bank branch registry configuration from TOML (`[registry]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    pub base_url: String,
}

impl Default for FileRegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ifsc.razorpay.com".to_string(),
        }
    }
}
