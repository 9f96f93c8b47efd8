//! Completion service configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Environment variables consulted for the API key, in order.
pub const DEFAULT_API_KEY_ENV: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Raw completion service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Direct API key (prefer the environment variables).
    pub api_key: Option<String>,
    /// Environment variables checked when `api_key` is unset.
    pub api_key_env: Vec<String>,
    pub base_url: String,
    /// Model for structured lookups and text extraction.
    pub text_model: String,
    /// Model for background removal.
    pub image_model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.iter().map(|s| s.to_string()).collect(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: explicit value first, then each env var in order.
    ///
    /// Blank values are skipped. `lookup` is the environment accessor.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .into_iter()
            .chain(self.api_key_env.iter().filter_map(|name| lookup(name)))
            .find(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        let key = config.resolve_api_key(env(&[("GEMINI_API_KEY", "from-env")]));
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_fallback_order() {
        let config = FileGeminiConfig::default();
        assert_eq!(
            config
                .resolve_api_key(env(&[("API_KEY", "b"), ("GEMINI_API_KEY", "a")]))
                .as_deref(),
            Some("a")
        );
        assert_eq!(
            config.resolve_api_key(env(&[("API_KEY", "b")])).as_deref(),
            Some("b")
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let config = FileGeminiConfig {
            api_key: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(
            config
                .resolve_api_key(env(&[("GEMINI_API_KEY", ""), ("API_KEY", "k")]))
                .as_deref(),
            Some("k")
        );
        assert!(config.resolve_api_key(env(&[])).is_none());
    }
}
