use serde_json::Value;

use crate::shared::bounding_box::BoundingBox;
use crate::shared::crop_error::CropError;

/// Maps one metadata schema onto a detection box.
///
/// `Ok(None)` means the metadata reports no detection, which is an expected
/// outcome. Shape problems are [`CropError::MalformedMetadata`].
pub trait MetadataAdapter: Send {
    fn extract_bbox(&self, metadata: &Value) -> Result<Option<BoundingBox>, CropError>;
}
