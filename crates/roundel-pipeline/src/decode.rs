//! Image decoding and RGBA normalization.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces a
//! four-channel RGBA image, whatever the source color type.
//!
//! This is the first step in the pipeline: raw bytes in, `RgbaImage` out.

use image::DynamicImage;

use crate::types::{PipelineError, RgbaImage};

/// Decode raw image bytes into a [`DynamicImage`].
///
/// The format is guessed from the byte signature, not from any file name.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    image::load_from_memory(bytes).map_err(PipelineError::ImageDecode)
}

/// Convert a decoded image to 8-bit RGBA.
///
/// Sources without an alpha channel (RGB, grayscale, JPEG) come out
/// fully opaque. Sources with 16-bit or float channels are narrowed.
#[must_use]
pub fn to_rgba(image: &DynamicImage) -> RgbaImage {
    image.to_rgba8()
}

/// Decode raw image bytes and normalize to RGBA.
///
/// # Errors
///
/// Same as [`decode`].
#[must_use = "returns the decoded RGBA image"]
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    decode(bytes).map(|image| to_rgba(&image))
}
