use std::fs;
use std::path::Path;

use image::error::{DecodingError, ImageFormatHint};
use image::{DynamicImage, ImageError, ImageFormat};

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::constants::JPEG_EOI_MARKER;
use crate::shared::crop_error::CropError;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate into RGB frames.
///
/// The JPEG decoder already fills the missing tail of a stream cut short.
/// Without `allow_truncated`, a JPEG that does not end in its end-of-image
/// marker is rejected instead.
pub struct ImageFileReader {
    allow_truncated: bool,
}

impl ImageFileReader {
    pub fn new(allow_truncated: bool) -> Self {
        Self { allow_truncated }
    }

    pub fn allows_truncated(&self) -> bool {
        self.allow_truncated
    }

    fn decode(&self, path: &Path, bytes: &[u8]) -> Result<DynamicImage, CropError> {
        if is_truncated_jpeg(bytes) {
            if !self.allow_truncated {
                return Err(CropError::Decode {
                    path: path.to_path_buf(),
                    source: ImageError::Decoding(DecodingError::new(
                        ImageFormatHint::Exact(ImageFormat::Jpeg),
                        "stream ends before the end-of-image marker",
                    )),
                });
            }
            log::warn!("{} is truncated, decoding available data", path.display());
        }

        image::load_from_memory(bytes).map_err(|source| CropError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new(true)
    }
}

/// True for JPEG data whose last non-padding bytes are not an end-of-image marker.
fn is_truncated_jpeg(bytes: &[u8]) -> bool {
    if !matches!(image::guess_format(bytes), Ok(ImageFormat::Jpeg)) {
        return false;
    }
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    !bytes[..end].ends_with(&JPEG_EOI_MARKER)
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, CropError> {
        let bytes = fs::read(path).map_err(|e| CropError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let rgb = self.decode(path, &bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}
