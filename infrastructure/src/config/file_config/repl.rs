//! `[repl]` section: interactive hub settings

use serde::{Deserialize, Serialize};

/// Raw hub REPL settings from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Spinner while a lookup is in flight
    pub show_progress: bool,
    /// Line history file; unset means the per-user data directory
    pub history_file: Option<String>,
    /// Where `/save` writes the background-removed PNG when no path is given
    pub save_path: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            save_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_save_path_is_read() {
        let toml_str = r#"
[repl]
save_path = "cutouts/latest.png"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repl.save_path.as_deref(), Some("cutouts/latest.png"));
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_save_path_defaults_to_unset() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.repl.save_path.is_none());
    }
}
