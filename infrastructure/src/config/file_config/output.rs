//! `[output]` section: how finished records are printed

use neuralcore_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output settings from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `card` or `json`; `None` leaves the choice to the command line.
    pub format: Option<OutputFormat>,
    /// Colored cards and badges
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_json_format_without_color() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "full"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
