//! Shared types for the roundel circular-crop pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference the
/// intermediate mask without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference decoded and
/// composited images without depending on `image` directly.
pub use image::RgbaImage;

/// Re-export `ImageFormat` so callers can pick an output encoding
/// without depending on `image` directly.
pub use image::ImageFormat;

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (pixels from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of an existing image buffer.
    #[must_use]
    pub fn of<P: image::Pixel>(image: &image::ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    /// The shorter of the two sides.
    #[must_use]
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Total pixel count (`width * height`).
    #[must_use]
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A square region of an image, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge of the square (inclusive).
    pub x: u32,
    /// Top edge of the square (inclusive).
    pub y: u32,
    /// Side length of the square.
    pub side: u32,
}

impl CropRect {
    /// Dimensions of the cropped region.
    #[must_use]
    pub const fn dimensions(self) -> Dimensions {
        Dimensions {
            width: self.side,
            height: self.side,
        }
    }
}

/// Every intermediate of a single pipeline run.
///
/// Produced by [`crate::process_staged`] and by
/// [`Composited::into_result`](crate::pipeline::Composited::into_result).
#[derive(Debug, Clone)]
pub struct StagedResult {
    /// The decoded source image, normalized to RGBA.
    pub original: RgbaImage,
    /// Where the square was taken from the source.
    pub crop: CropRect,
    /// The centered square crop, before masking.
    pub cropped: RgbaImage,
    /// The single-channel circle stencil (0 outside, 255 inside).
    pub mask: GrayImage,
    /// The final square image, transparent outside the circle.
    pub output: RgbaImage,
}

impl StagedResult {
    /// Dimensions of the decoded source image.
    #[must_use]
    pub fn source_dimensions(&self) -> Dimensions {
        Dimensions::of(&self.original)
    }
}

/// Errors that can occur in the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// No encoder is available for the requested output.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Failed to encode the output image.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),
}
