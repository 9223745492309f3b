use ndarray::{s, ArrayView3};

use crate::shared::bounding_box::{ImageDimensions, PixelRect};

/// A decoded image: contiguous bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the domain layer
/// treats pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Zero-filled frame, used as the no-detection placeholder.
    pub fn blank(width: u32, height: u32, channels: u8) -> Self {
        let len = (width as usize) * (height as usize) * (channels as usize);
        Self::new(vec![0; len], width, height, channels)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies the pixels inside `rect` into a new frame.
    ///
    /// `rect` must lie within the frame.
    pub fn crop(&self, rect: &PixelRect) -> Frame {
        debug_assert!(
            rect.fits_within(self.dimensions()),
            "crop rectangle must lie within the frame"
        );
        let view = self.as_ndarray();
        let region = view.slice(s![
            rect.top as usize..rect.bottom as usize,
            rect.left as usize..rect.right as usize,
            ..
        ]);
        let data: Vec<u8> = region.iter().copied().collect();
        Frame::new(data, rect.width(), rect.height(), self.channels)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
