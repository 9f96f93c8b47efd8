//! Slash-command parsing for the hub REPL

use neuralcore_domain::{ToolId, VisualMode};
use std::path::PathBuf;
use thiserror::Error;

/// File name used by `/save` when no path is given.
pub const DEFAULT_SAVE_PATH: &str = "ai-vision-output.png";

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubCommand {
    /// List the tools
    Catalog,
    /// Activate a tool
    Use(ToolId),
    /// Leave the active tool
    Back,
    /// Switch the visual sub-mode
    Mode(VisualMode),
    /// Re-render the active tool's result or idle card
    Show,
    /// Write the processed image; `None` uses the configured default path
    Save(Option<PathBuf>),
    Help,
    Quit,
    /// Input for the active tool
    Submit(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0}. Type /help for available commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

impl HubCommand {
    /// Parse one line. Blank lines yield `None`.
    ///
    /// A leading `/` followed by a word is a command; anything else (including
    /// absolute paths such as `/tmp/scan.png`) is tool input.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Some(HubCommand::Submit(line.to_string())));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        if !name.chars().all(|c| c.is_ascii_alphabetic()) || name.is_empty() {
            return Ok(Some(HubCommand::Submit(line.to_string())));
        }

        let command = match name.to_ascii_lowercase().as_str() {
            "tools" | "catalog" | "ls" => HubCommand::Catalog,
            "use" | "tool" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("/use <gst|ifsc|instagram|news|visual>"));
                }
                HubCommand::Use(arg.parse().map_err(CommandError::InvalidArgument)?)
            }
            "back" | "home" => HubCommand::Back,
            "mode" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("/mode <ocr|bg-remove>"));
                }
                HubCommand::Mode(arg.parse().map_err(CommandError::InvalidArgument)?)
            }
            "show" => HubCommand::Show,
            "save" => HubCommand::Save((!arg.is_empty()).then(|| PathBuf::from(arg))),
            "help" | "h" => HubCommand::Help,
            "quit" | "exit" | "q" => HubCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> HubCommand {
        HubCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(HubCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_plain_text_is_input() {
        assert_eq!(parse(" AI News "), HubCommand::Submit("AI News".into()));
        assert_eq!(parse("@natgeo"), HubCommand::Submit("@natgeo".into()));
    }

    #[test]
    fn test_absolute_path_is_input() {
        assert_eq!(
            parse("/tmp/scan.png"),
            HubCommand::Submit("/tmp/scan.png".into())
        );
    }

    #[test]
    fn test_use_accepts_aliases() {
        assert_eq!(parse("/use ifsc"), HubCommand::Use(ToolId::Ifsc));
        assert_eq!(parse("/use Trends"), HubCommand::Use(ToolId::News));
        assert_eq!(parse("/USE vision"), HubCommand::Use(ToolId::Visual));
    }

    #[test]
    fn test_use_errors() {
        assert!(matches!(
            HubCommand::parse("/use"),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            HubCommand::parse("/use pan"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            parse("/mode bg-remove"),
            HubCommand::Mode(VisualMode::BackgroundRemoval)
        );
        assert_eq!(parse("/mode ocr"), HubCommand::Mode(VisualMode::Ocr));
        assert!(HubCommand::parse("/mode sharpen").is_err());
    }

    #[test]
    fn test_save_default_and_explicit() {
        assert_eq!(parse("/save"), HubCommand::Save(None));
        assert_eq!(
            parse("/save out/cutout.png"),
            HubCommand::Save(Some(PathBuf::from("out/cutout.png")))
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("/tools"), HubCommand::Catalog);
        assert_eq!(parse("/catalog"), HubCommand::Catalog);
        assert_eq!(parse("/back"), HubCommand::Back);
        assert_eq!(parse("/show"), HubCommand::Show);
        assert_eq!(parse("/help"), HubCommand::Help);
        assert_eq!(parse("/exit"), HubCommand::Quit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            HubCommand::parse("/frobnicate"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
    }
}
