use std::path::Path;

use serde_json::Value;

use crate::shared::crop_error::CropError;

/// Loads a metadata document into a generic JSON value.
pub trait MetadataReader: Send {
    fn read(&self, path: &Path) -> Result<Value, CropError>;
}
