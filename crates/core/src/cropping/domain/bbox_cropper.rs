use crate::shared::bounding_box::{BoundingBox, ImageDimensions, PixelRect};
use crate::shared::constants::DEFAULT_MARGIN_FRACTION;
use crate::shared::crop_error::CropError;
use crate::shared::frame::Frame;

/// Expands `bbox` by `margin_fraction` of its own size and clamps it to the image.
///
/// Half of the fraction is added on each side, so a fraction of 0.10 grows
/// both width and height by 10%. Reversed edges are normalized first and every
/// edge ends up inside `[0, extent]`, which keeps
/// `0 <= left <= right <= width` and `0 <= top <= bottom <= height`.
pub fn expand_and_clamp(
    bbox: &BoundingBox,
    dims: ImageDimensions,
    margin_fraction: f64,
) -> BoundingBox {
    let b = bbox.normalized();
    let factor = margin_fraction / 2.0;
    let h_margin = b.width() * factor;
    let v_margin = b.height() * factor;

    let max_x = dims.width as f64;
    let max_y = dims.height as f64;

    BoundingBox {
        left: (b.left - h_margin).clamp(0.0, max_x),
        top: (b.top - v_margin).clamp(0.0, max_y),
        right: (b.right + h_margin).clamp(0.0, max_x),
        bottom: (b.bottom + v_margin).clamp(0.0, max_y),
    }
}

/// Turns an optional detection box into the output frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBoxCropper {
    margin_fraction: f64,
}

impl BBoxCropper {
    pub fn new(margin_fraction: f64) -> Result<Self, CropError> {
        if !margin_fraction.is_finite() || margin_fraction < 0.0 {
            return Err(CropError::InvalidMargin(margin_fraction));
        }
        Ok(Self { margin_fraction })
    }

    pub fn margin_fraction(&self) -> f64 {
        self.margin_fraction
    }

    /// Pixel rectangle that [`BBoxCropper::crop`] would extract for `bbox`.
    pub fn crop_rect(&self, bbox: &BoundingBox, dims: ImageDimensions) -> PixelRect {
        expand_and_clamp(bbox, dims, self.margin_fraction).to_pixel_rect()
    }

    /// Crops the padded box out of `frame`, or returns a zero-filled frame of
    /// the same size when there is no box.
    pub fn crop(&self, frame: &Frame, bbox: Option<&BoundingBox>) -> Result<Frame, CropError> {
        let Some(bbox) = bbox else {
            log::debug!(
                "No bounding box, producing {}x{} placeholder",
                frame.width(),
                frame.height()
            );
            return Ok(Frame::blank(frame.width(), frame.height(), frame.channels()));
        };

        let rect = self.crop_rect(bbox, frame.dimensions());
        if rect.is_empty() {
            return Err(CropError::EmptyCrop { rect });
        }
        log::debug!(
            "Cropping {:?} (margin {}) to {}x{}",
            bbox,
            self.margin_fraction,
            rect.width(),
            rect.height()
        );
        Ok(frame.crop(&rect))
    }
}

impl Default for BBoxCropper {
    fn default() -> Self {
        Self {
            margin_fraction: DEFAULT_MARGIN_FRACTION,
        }
    }
}
