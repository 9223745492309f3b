/// Total proportional growth applied to each box dimension before cropping.
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.05;

/// JPEG end-of-image marker; its absence marks a truncated file.
pub const JPEG_EOI_MARKER: [u8; 2] = [0xFF, 0xD9];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
