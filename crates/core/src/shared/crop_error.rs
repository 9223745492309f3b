use std::path::PathBuf;

use thiserror::Error;

use crate::shared::bounding_box::PixelRect;

/// Fatal failures of a single crop invocation.
///
/// "No detection" is not represented here: adapters return `Ok(None)` and the
/// pipeline writes a placeholder.
#[derive(Error, Debug)]
pub enum CropError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid JSON in metadata file {path}: {source}")]
    MetadataJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),
    #[error("margin fraction must be finite and non-negative, got {0}")]
    InvalidMargin(f64),
    #[error("crop rectangle {rect:?} is empty")]
    EmptyCrop { rect: PixelRect },
    #[error("unknown metadata schema '{0}', expected 'fish-count' or 'has-fish'")]
    UnknownSchema(String),
}

impl CropError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMetadata(reason.into())
    }

    /// True for the metadata shape errors that must not be confused with an
    /// absent detection.
    pub fn is_malformed_metadata(&self) -> bool {
        matches!(self, Self::MalformedMetadata(_))
    }
}
