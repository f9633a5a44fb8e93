//! Filesystem access: read and decode the input, encode and write the
//! output.

use std::path::Path;

use roundel_pipeline::{ImageFormat, PipelineError, RgbaImage, decode, encode};

use crate::error::{LoadError, SaveError};

/// Read the raw bytes of the input image.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file is missing or unreadable.
pub fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `path` and decode it to RGBA.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file is missing or unreadable.
/// Returns [`LoadError::Decode`] if the contents are not an image.
pub fn load_image(path: &Path) -> Result<RgbaImage, LoadError> {
    let bytes = read_source(path)?;
    decode_source(path, &bytes, decode::decode_rgba)
}

/// Run `decode` over `bytes` read from `path`, attributing any failure to
/// `path` as [`LoadError::Decode`].
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if `decode` fails.
pub fn decode_source<T>(
    path: &Path,
    bytes: &[u8],
    decode: impl FnOnce(&[u8]) -> Result<T, PipelineError>,
) -> Result<T, LoadError> {
    decode(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode `image` and write it to `path`, creating or replacing the file.
///
/// The format is `format` if given, otherwise inferred from the path's
/// extension. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`SaveError::Format`] if no format can be chosen.
/// Returns [`SaveError::Encode`] if the encoder rejects the image.
/// Returns [`SaveError::Write`] if the file cannot be written.
pub fn save_image(
    image: &RgbaImage,
    path: &Path,
    format: Option<ImageFormat>,
) -> Result<usize, SaveError> {
    let format = match format {
        Some(format) => format,
        None => encode::format_from_path(path).map_err(|source| SaveError::Format {
            path: path.to_path_buf(),
            source,
        })?,
    };

    let bytes = encode::encode(image, format).map_err(|source| SaveError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, &bytes).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
