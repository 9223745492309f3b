use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::metadata::domain::metadata_reader::MetadataReader;
use crate::shared::crop_error::CropError;

/// Reads metadata from a JSON file on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFileMetadataReader;

impl JsonFileMetadataReader {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for JsonFileMetadataReader {
    fn read(&self, path: &Path) -> Result<Value, CropError> {
        let text = fs::read_to_string(path).map_err(|e| CropError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| CropError::MetadataJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
