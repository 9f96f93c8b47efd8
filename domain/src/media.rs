//! Data URL value object
//!
//! Images travel through the hub as `data:<mime>;base64,<payload>` strings.
//! This module only splits and joins them; decoding the payload is an
//! infrastructure concern.

use thiserror::Error;

/// Problems with a data URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,

    #[error("missing comma in data URL")]
    MissingComma,

    #[error("only base64 encoded data URLs are supported")]
    NotBase64,

    #[error("data URL has no MIME type")]
    MissingMimeType,
}

/// A parsed base64 data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    payload: String,
}

impl DataUrl {
    /// Build from a MIME type and an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            payload: payload.into(),
        }
    }

    /// Split `data:<mime>;base64,<payload>` into its parts.
    pub fn parse(raw: &str) -> Result<Self, DataUrlError> {
        let rest = raw.trim().strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let (metadata, payload) = rest.split_once(',').ok_or(DataUrlError::MissingComma)?;
        let mime_type = metadata.strip_suffix(";base64").ok_or(DataUrlError::NotBase64)?;
        // Parameters such as `;charset=` may sit between the type and `;base64`.
        let mime_type = mime_type.split(';').next().unwrap_or_default().trim();
        if mime_type.is_empty() {
            return Err(DataUrlError::MissingMimeType);
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            payload: payload.trim().to_string(),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload, without the header.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_parts(self) -> (String, String) {
        (self.mime_type, self.payload)
    }
}

impl std::fmt::Display for DataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png() {
        let url = DataUrl::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(url.mime_type(), "image/png");
        assert_eq!(url.payload(), "iVBORw0KGgo=");
    }

    #[test]
    fn test_display_round_trips() {
        let raw = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(DataUrl::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn test_parse_with_parameters() {
        let url = DataUrl::parse("data:image/svg+xml;charset=utf-8;base64,PHN2Zz4=").unwrap();
        assert_eq!(url.mime_type(), "image/svg+xml");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(DataUrl::parse("/tmp/x.png"), Err(DataUrlError::MissingScheme));
        assert_eq!(DataUrl::parse("data:image/png;base64"), Err(DataUrlError::MissingComma));
        assert_eq!(DataUrl::parse("data:text/plain,hello"), Err(DataUrlError::NotBase64));
        assert_eq!(DataUrl::parse("data:;base64,AAAA"), Err(DataUrlError::MissingMimeType));
    }
}
