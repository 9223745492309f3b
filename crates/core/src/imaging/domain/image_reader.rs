use std::path::Path;

use crate::shared::crop_error::CropError;
use crate::shared::frame::Frame;

/// Decodes an image file into a [`Frame`].
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, CropError>;
}
