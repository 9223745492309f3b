use std::path::Path;

use image::DynamicImage;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::crop_error::CropError;
use crate::shared::frame::Frame;

/// Writes frames to image files using the `image` crate.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_dynamic_image(frame: &Frame) -> Option<DynamicImage> {
    let (w, h, data) = (frame.width(), frame.height(), frame.data().to_vec());
    match frame.channels() {
        1 => image::GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        3 => image::RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        _ => None,
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), CropError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CropError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let img = to_dynamic_image(frame).ok_or_else(|| CropError::Encode {
            path: path.to_path_buf(),
            source: image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            )),
        })?;

        img.save(path).map_err(|source| CropError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
