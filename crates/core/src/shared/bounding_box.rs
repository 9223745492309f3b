/// Axis-aligned box `(left, top, right, bottom)` in source-image pixels.
///
/// Coordinates stay floating point until the final crop so margins are not
/// truncated. `left <= right` and `top <= bottom` are expected but not
/// enforced; see [`BoundingBox::normalized`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a box from the `[left, top, right, bottom]` order used in metadata files.
    pub fn from_edges(edges: [f64; 4]) -> Self {
        let [left, top, right, bottom] = edges;
        Self::new(left, top, right, bottom)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the same box with reversed edges swapped back into order.
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Rounds each edge half-to-even into integer pixel coordinates.
    ///
    /// Negative edges saturate at zero; callers clamp to the image first.
    pub fn to_pixel_rect(&self) -> PixelRect {
        let px = |v: f64| v.round_ties_even().max(0.0) as u32;
        PixelRect {
            left: px(self.left),
            top: px(self.top),
            right: px(self.right),
            bottom: px(self.bottom),
        }
    }
}

/// Width and height of a source image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Integer crop rectangle, right/bottom exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub(crate) fn fits_within(&self, dims: ImageDimensions) -> bool {
        self.left <= self.right
            && self.top <= self.bottom
            && self.right <= dims.width
            && self.bottom <= dims.height
    }
}
