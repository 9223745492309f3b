use serde_json::Value;

use super::bbox_json::parse_bbox;
use crate::metadata::domain::metadata_adapter::MetadataAdapter;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::crop_error::CropError;

/// Reads the reformatted detector schema:
/// `{"fish": {"fish_num": <int>, "bbox": [l, t, r, b]}}`.
///
/// A document without a `"fish"` entry, or with `fish_num <= 0`, reports no
/// detection. A `"fish"` entry of the wrong shape is malformed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FishCountAdapter;

impl FishCountAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataAdapter for FishCountAdapter {
    fn extract_bbox(&self, metadata: &Value) -> Result<Option<BoundingBox>, CropError> {
        let root = metadata
            .as_object()
            .ok_or_else(|| CropError::malformed("metadata root must be an object"))?;

        let Some(fish) = root.get("fish") else {
            log::debug!("Metadata has no 'fish' entry");
            return Ok(None);
        };
        let fish = fish
            .as_object()
            .ok_or_else(|| CropError::malformed("'fish' must be an object"))?;

        let count = fish
            .get("fish_num")
            .ok_or_else(|| CropError::malformed("missing 'fish.fish_num'"))?
            .as_f64()
            .ok_or_else(|| CropError::malformed("'fish.fish_num' must be a number"))?;
        if count <= 0.0 {
            return Ok(None);
        }

        parse_bbox(fish.get("bbox"), "fish.bbox").map(Some)
    }
}
