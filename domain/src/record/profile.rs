//! Social profile record

use serde::{Deserialize, Serialize};

/// Public profile summary
///
/// Counts are kept as the display strings the service produced ("1.2M").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Handle without the leading `@`.
    pub username: String,
    pub full_name: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub posts: String,
    pub is_private: bool,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

impl ProfileRecord {
    /// First character of the display name, for the avatar badge.
    pub fn initial(&self) -> Option<char> {
        self.full_name
            .chars()
            .next()
            .or_else(|| self.username.chars().next())
    }
}
