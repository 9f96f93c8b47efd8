//! Filesystem image source
//!
//! Reads an image file into a base64 data URL (MIME type from the file
//! extension) and writes decoded data URLs back to disk.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use neuralcore_application::{ImageSourceError, ImageSourcePort};
use neuralcore_domain::DataUrl;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Refuse anything larger than this before encoding.
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// MIME type for a supported image extension.
fn mime_for(path: &Path) -> Result<&'static str, ImageSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        "heic" => Ok("image/heic"),
        "heif" => Ok("image/heif"),
        _ => Err(ImageSourceError::UnsupportedType(path.display().to_string())),
    }
}

/// [`ImageSourcePort`] over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalImageSource;

impl LocalImageSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSourcePort for LocalImageSource {
    fn load(&self, path: &Path) -> Result<DataUrl, ImageSourceError> {
        let mime_type = mime_for(path)?;
        let io_err = |source| ImageSourceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(io_err)?.len();
        if size == 0 {
            return Err(ImageSourceError::Empty(path.to_path_buf()));
        }
        if size > MAX_IMAGE_BYTES {
            return Err(ImageSourceError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_IMAGE_BYTES,
            });
        }

        let bytes = fs::read(path).map_err(io_err)?;
        debug!(path = %path.display(), bytes = bytes.len(), mime = mime_type, "Image loaded");
        Ok(DataUrl::new(mime_type, BASE64_STANDARD.encode(bytes)))
    }

    fn store(&self, image: &DataUrl, path: &Path) -> Result<(), ImageSourceError> {
        let bytes = BASE64_STANDARD
            .decode(image.payload())
            .map_err(|e| ImageSourceError::Decode(e.to_string()))?;
        fs::write(path, &bytes).map_err(|source| ImageSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Image written");
        Ok(())
    }
}
