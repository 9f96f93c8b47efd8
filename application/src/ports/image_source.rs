//! Local image source port
//!
//! Converts files on disk into data URLs for the image tool, and writes
//! produced images back out.

use neuralcore_domain::{DataUrl, DataUrlError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageSourceError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("image file is empty: {0}")]
    Empty(PathBuf),

    #[error("image too large: {path} is {size} bytes (max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error(transparent)]
    DataUrl(#[from] DataUrlError),

    #[error("image payload is not valid base64: {0}")]
    Decode(String),
}

/// Reads and writes images as data URLs
pub trait ImageSourcePort: Send + Sync {
    /// Load `path` and encode it as a data URL.
    fn load(&self, path: &Path) -> Result<DataUrl, ImageSourceError>;

    /// Decode `image` and write the bytes to `path`.
    fn store(&self, image: &DataUrl, path: &Path) -> Result<(), ImageSourceError>;
}
