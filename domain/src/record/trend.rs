//! Trend digest record (topic summarization)

use serde::{Deserialize, Serialize};

/// One trending story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendItem {
    pub title: String,
    pub summary: String,
    pub creator_tip: String,
    pub url: String,
    /// 0..=100
    pub viral_score: u8,
    pub hook: String,
}

/// Stories for one topic, in service order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDigest {
    pub topic: String,
    #[serde(rename = "newsItems")]
    pub items: Vec<TrendItem>,
}

impl TrendDigest {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
