use std::path::Path;

use crate::cropping::domain::bbox_cropper::BBoxCropper;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::metadata::domain::metadata_adapter::MetadataAdapter;
use crate::metadata::domain::metadata_reader::MetadataReader;
use crate::shared::bounding_box::{ImageDimensions, PixelRect};
use crate::shared::crop_error::CropError;

/// What was written to the output path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropOutcome {
    Cropped(PixelRect),
    /// No detection: a blank image of the source size was written.
    Placeholder(ImageDimensions),
}

/// Single-image cropping pipeline: read → extract box → crop → write.
pub struct CropImageUseCase {
    image_reader: Box<dyn ImageReader>,
    image_writer: Box<dyn ImageWriter>,
    metadata_reader: Box<dyn MetadataReader>,
    adapter: Box<dyn MetadataAdapter>,
    cropper: BBoxCropper,
}

impl CropImageUseCase {
    pub fn new(
        image_reader: Box<dyn ImageReader>,
        image_writer: Box<dyn ImageWriter>,
        metadata_reader: Box<dyn MetadataReader>,
        adapter: Box<dyn MetadataAdapter>,
        cropper: BBoxCropper,
    ) -> Self {
        Self {
            image_reader,
            image_writer,
            metadata_reader,
            adapter,
            cropper,
        }
    }

    /// Crops the detected subject out of `image_path` and writes it to
    /// `output_path`. The output is written even when nothing was detected.
    pub fn execute(
        &self,
        image_path: &Path,
        metadata_path: &Path,
        output_path: &Path,
    ) -> Result<CropOutcome, CropError> {
        let frame = self.image_reader.read(image_path)?;
        let metadata = self.metadata_reader.read(metadata_path)?;
        let bbox = self.adapter.extract_bbox(&metadata)?;

        let outcome = match &bbox {
            Some(b) => CropOutcome::Cropped(self.cropper.crop_rect(b, frame.dimensions())),
            None => {
                log::info!(
                    "No bounding box available for {}, writing an empty {}x{} image",
                    image_path.display(),
                    frame.width(),
                    frame.height()
                );
                CropOutcome::Placeholder(frame.dimensions())
            }
        };

        let output = self.cropper.crop(&frame, bbox.as_ref())?;
        self.image_writer.write(output_path, &output)?;
        Ok(outcome)
    }
}
