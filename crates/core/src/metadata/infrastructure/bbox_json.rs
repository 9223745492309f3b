use serde_json::Value;

use crate::shared::bounding_box::BoundingBox;
use crate::shared::crop_error::CropError;

/// Parses a `[left, top, right, bottom]` JSON array of numbers.
pub(crate) fn parse_bbox(value: Option<&Value>, context: &str) -> Result<BoundingBox, CropError> {
    let value = value.ok_or_else(|| CropError::malformed(format!("missing '{context}'")))?;
    let items = value
        .as_array()
        .ok_or_else(|| CropError::malformed(format!("'{context}' must be an array")))?;
    if items.len() != 4 {
        return Err(CropError::malformed(format!(
            "'{context}' must hold 4 numbers, got {}",
            items.len()
        )));
    }

    let mut edges = [0.0; 4];
    for (edge, item) in edges.iter_mut().zip(items) {
        *edge = item
            .as_f64()
            .ok_or_else(|| CropError::malformed(format!("'{context}' contains non-number {item}")))?;
    }
    Ok(BoundingBox::from_edges(edges))
}
