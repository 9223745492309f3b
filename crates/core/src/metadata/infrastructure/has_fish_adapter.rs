use serde_json::Value;

use super::bbox_json::parse_bbox;
use crate::metadata::domain::metadata_adapter::MetadataAdapter;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::crop_error::CropError;

/// Reads the per-image keyed schema:
/// `{<image_key>: {"has_fish": <bool>, "fish": [{"bbox": [l, t, r, b]}, ...]}}`.
///
/// Only the first entry (document order) is consulted, and only the first
/// fish within it.
#[derive(Clone, Copy, Debug, Default)]
pub struct HasFishAdapter;

impl HasFishAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataAdapter for HasFishAdapter {
    fn extract_bbox(&self, metadata: &Value) -> Result<Option<BoundingBox>, CropError> {
        let root = metadata
            .as_object()
            .ok_or_else(|| CropError::malformed("metadata root must be an object"))?;
        let (key, entry) = root
            .iter()
            .next()
            .ok_or_else(|| CropError::malformed("metadata has no image entry"))?;
        if root.len() > 1 {
            log::warn!(
                "Metadata holds {} image entries, using '{key}'",
                root.len()
            );
        }

        let has_fish = entry
            .get("has_fish")
            .ok_or_else(|| CropError::malformed(format!("missing '{key}.has_fish'")))?
            .as_bool()
            .ok_or_else(|| CropError::malformed(format!("'{key}.has_fish' must be a boolean")))?;
        if !has_fish {
            return Ok(None);
        }

        let first = entry
            .get("fish")
            .and_then(Value::as_array)
            .and_then(|fish| fish.first())
            .ok_or_else(|| {
                CropError::malformed(format!(
                    "'{key}.has_fish' is true but '{key}.fish' has no entries"
                ))
            })?;
        parse_bbox(first.get("bbox"), &format!("{key}.fish[0].bbox")).map(Some)
    }
}
