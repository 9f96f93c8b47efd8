//! Visual record (image tool)

use serde::{Deserialize, Serialize};

/// Message shown when extraction produced no text.
pub const NO_TEXT_DETECTED: &str = "No text detected.";

/// Sub-mode of the image tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualMode {
    /// Text extraction
    #[default]
    #[serde(rename = "ocr")]
    Ocr,
    /// Subject isolation
    #[serde(rename = "bg-remove")]
    BackgroundRemoval,
}

impl VisualMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualMode::Ocr => "ocr",
            VisualMode::BackgroundRemoval => "bg-remove",
        }
    }

    /// Label used in the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            VisualMode::Ocr => "OCR Extraction",
            VisualMode::BackgroundRemoval => "Background Removal",
        }
    }
}

impl std::fmt::Display for VisualMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisualMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ocr" | "extract" | "text" => Ok(VisualMode::Ocr),
            "bg-remove" | "bg" | "background" | "remove-bg" => Ok(VisualMode::BackgroundRemoval),
            other => Err(format!(
                "unknown visual mode '{}' (expected 'ocr' or 'bg-remove')",
                other
            )),
        }
    }
}

/// Output of one image submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualRecord {
    pub mode: VisualMode,
    /// Data URL that was submitted.
    pub original_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    /// Data URL of the isolated subject, if the service produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
}

impl VisualRecord {
    /// Extracted text for display; never blank.
    pub fn display_text(&self) -> &str {
        match self.extracted_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_TEXT_DETECTED,
        }
    }

    /// Processed image, if one was actually produced.
    pub fn produced_image(&self) -> Option<&str> {
        self.processed_image.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mode: VisualMode) -> VisualRecord {
        VisualRecord {
            mode,
            original_image: "data:image/png;base64,AAAA".into(),
            extracted_text: None,
            processed_image: None,
        }
    }

    #[test]
    fn test_mode_parse_and_serde() {
        assert_eq!("bg-remove".parse::<VisualMode>().unwrap(), VisualMode::BackgroundRemoval);
        assert_eq!("OCR".parse::<VisualMode>().unwrap(), VisualMode::Ocr);
        assert!("blur".parse::<VisualMode>().is_err());
        assert_eq!(
            serde_json::to_string(&VisualMode::BackgroundRemoval).unwrap(),
            "\"bg-remove\""
        );
    }

    #[test]
    fn test_empty_text_shows_no_text_detected() {
        let mut r = record(VisualMode::Ocr);
        assert_eq!(r.display_text(), NO_TEXT_DETECTED);
        r.extracted_text = Some("  \n".into());
        assert_eq!(r.display_text(), NO_TEXT_DETECTED);
        r.extracted_text = Some("INVOICE #42".into());
        assert_eq!(r.display_text(), "INVOICE #42");
    }

    #[test]
    fn test_empty_processed_image_is_nothing() {
        let mut r = record(VisualMode::BackgroundRemoval);
        r.processed_image = Some(String::new());
        assert_eq!(r.produced_image(), None);
    }
}
