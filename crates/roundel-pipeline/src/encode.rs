//! Output encoding.
//!
//! The output format is picked from a file name's extension. Formats that
//! carry an alpha channel get the RGBA buffer as-is; formats without one
//! get the buffer with alpha dropped, so transparent corners come out as
//! the black stored underneath them.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::types::{PipelineError, RgbaImage};

/// Formats this crate is built to encode.
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::WebP,
];

/// Choose an output format from `path`'s extension.
///
/// # Errors
///
/// Returns [`PipelineError::UnsupportedFormat`] if the path has no
/// extension, or the extension names a format this build cannot write.
pub fn format_from_path(path: &Path) -> Result<ImageFormat, PipelineError> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        PipelineError::UnsupportedFormat(format!(
            "cannot infer format from '{}'",
            path.display()
        ))
    })?;
    if SUPPORTED_FORMATS.contains(&format) {
        Ok(format)
    } else {
        Err(PipelineError::UnsupportedFormat(format!("{format:?}")))
    }
}

/// Whether `format` stores an alpha channel for 8-bit RGBA input.
#[must_use]
pub const fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png | ImageFormat::Bmp | ImageFormat::WebP
    )
}

/// Encode `image` into `format`.
///
/// # Errors
///
/// Returns [`PipelineError::ImageEncode`] if the encoder rejects the
/// image, e.g. zero-sized buffers.
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, PipelineError> {
    let dynamic = if supports_alpha(format) {
        DynamicImage::ImageRgba8(image.clone())
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image.clone()).to_rgb8())
    };

    let mut buf = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buf, format)
        .map_err(PipelineError::ImageEncode)?;
    Ok(buf.into_inner())
}
