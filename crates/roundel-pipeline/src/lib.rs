//! roundel-pipeline: Pure circular-crop pipeline (sans-IO).
//!
//! Turns any raster image into a square image with transparent corners:
//! decode -> centered square crop -> circle mask -> masked paste onto a
//! transparent canvas -> encode.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and image buffers. All filesystem interaction lives in
//! the `roundel` crate.

pub mod composite;
pub mod crop;
pub mod decode;
pub mod diagnostics;
pub mod encode;
pub mod mask;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod test_support;

pub use composite::circle_crop;
pub use encode::{encode, format_from_path};
pub use pipeline::Pipeline;
pub use types::{
    CropRect, Dimensions, GrayImage, ImageFormat, PipelineError, Point, RgbaImage, StagedResult,
};

/// Run the full pipeline and return the circular image.
///
/// Takes raw image bytes (PNG, JPEG, BMP, WebP) and produces an
/// `S`×`S` RGBA image, `S` being the shorter side of the source.
///
/// # Pipeline steps
///
/// 1. Decode image and convert to RGBA
/// 2. Crop the largest centered square
/// 3. Rasterize the inscribed circle mask
/// 4. Paste the square through the mask onto a transparent canvas
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is unrecognized.
pub fn process(image_bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    let original = decode::decode_rgba(image_bytes)?;
    Ok(circle_crop(&original))
}

/// Run the full pipeline, keeping every intermediate image.
///
/// # Errors
///
/// Same as [`process`].
pub fn process_staged(image_bytes: &[u8]) -> Result<StagedResult, PipelineError> {
    Ok(Pipeline::new(image_bytes.to_vec())
        .decode()?
        .crop()
        .mask()
        .composite()
        .into_result())
}
