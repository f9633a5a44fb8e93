//! Incremental pipeline: advance stage-by-stage, inspecting each
//! intermediate result before continuing.
//!
//! Unlike [`crate::process`] which runs everything in one call,
//! [`Pipeline`] lets the caller drive execution one step at a time:
//!
//! ```rust
//! # use roundel_pipeline::{Pipeline, PipelineError};
//! # fn run(png: Vec<u8>) -> Result<(), PipelineError> {
//! let staged = Pipeline::new(png)
//!     .decode()?
//!     .crop()
//!     .mask()
//!     .composite()
//!     .into_result();
//! # Ok(())
//! # }
//! ```
//!
//! Each stage method consumes `self` and returns the next pipeline state,
//! carrying all previously computed intermediates. Only decoding can fail.

use crate::composite::mask_square;
use crate::crop::{centered_square, crop};
use crate::mask::circle_mask;
use crate::types::{
    CropRect, Dimensions, GrayImage, PipelineError, RgbaImage, StagedResult,
};

/// Entry point for the staged pipeline.
pub struct Pipeline;

impl Pipeline {
    /// Start a pipeline over raw image bytes.
    #[allow(clippy::new_ret_no_self)]
    pub const fn new(source: Vec<u8>) -> Pending {
        Pending { source }
    }
}

// ───────────────────────── Stage 0: Pending ──────────────────────────

/// Pipeline state before any processing has occurred.
#[must_use = "pipeline stages are consumed by advancing — call .decode() to continue"]
pub struct Pending {
    source: Vec<u8>,
}

impl Pending {
    /// The raw source image bytes.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Decode the source image and advance to the [`Decoded`] stage.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] if the source bytes are
    /// empty. Returns [`PipelineError::ImageDecode`] if the image
    /// format is unrecognized or the data is corrupt.
    pub fn decode(self) -> Result<Decoded, PipelineError> {
        let original = crate::decode::decode_rgba(&self.source)?;
        Ok(Decoded {
            source_len: self.source.len(),
            original,
        })
    }
}

// ───────────────────────── Stage 1: Decoded ──────────────────────────

/// Pipeline state after decoding and RGBA normalization.
#[must_use = "pipeline stages are consumed by advancing — call .crop() to continue"]
pub struct Decoded {
    source_len: usize,
    original: RgbaImage,
}

impl Decoded {
    /// Wrap an already-decoded image, skipping the decode stage.
    pub const fn from_image(original: RgbaImage) -> Self {
        Self {
            source_len: 0,
            original,
        }
    }

    /// Size of the encoded source in bytes (0 if built from an image).
    #[must_use]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// The decoded RGBA image.
    #[must_use]
    pub const fn original(&self) -> &RgbaImage {
        &self.original
    }

    /// Dimensions of the decoded image.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.original)
    }

    /// Cut the centered square and advance to the [`Cropped`] stage.
    pub fn crop(self) -> Cropped {
        let rect = centered_square(self.dimensions());
        let cropped = crop(&self.original, rect);
        Cropped {
            original: self.original,
            rect,
            cropped,
        }
    }
}

// ───────────────────────── Stage 2: Cropped ──────────────────────────

/// Pipeline state after the centered square crop.
#[must_use = "pipeline stages are consumed by advancing — call .mask() to continue"]
pub struct Cropped {
    original: RgbaImage,
    rect: CropRect,
    cropped: RgbaImage,
}

impl Cropped {
    /// The decoded RGBA image.
    #[must_use]
    pub const fn original(&self) -> &RgbaImage {
        &self.original
    }

    /// Where the square was taken from.
    #[must_use]
    pub const fn crop_rect(&self) -> CropRect {
        self.rect
    }

    /// The square crop.
    #[must_use]
    pub const fn cropped(&self) -> &RgbaImage {
        &self.cropped
    }

    /// Rasterize the circle stencil and advance to the [`Masked`] stage.
    pub fn mask(self) -> Masked {
        let mask = circle_mask(self.rect.side);
        Masked {
            original: self.original,
            rect: self.rect,
            cropped: self.cropped,
            mask,
        }
    }
}

// ───────────────────────── Stage 3: Masked ───────────────────────────

/// Pipeline state once the circle stencil exists.
#[must_use = "pipeline stages are consumed by advancing — call .composite() to continue"]
pub struct Masked {
    original: RgbaImage,
    rect: CropRect,
    cropped: RgbaImage,
    mask: GrayImage,
}

impl Masked {
    /// The square crop.
    #[must_use]
    pub const fn cropped(&self) -> &RgbaImage {
        &self.cropped
    }

    /// The circle stencil.
    #[must_use]
    pub const fn mask(&self) -> &GrayImage {
        &self.mask
    }

    /// Paste the crop through the mask onto a transparent canvas and
    /// advance to the [`Composited`] stage.
    pub fn composite(self) -> Composited {
        let output = mask_square(&self.cropped, &self.mask);
        Composited {
            original: self.original,
            rect: self.rect,
            cropped: self.cropped,
            mask: self.mask,
            output,
        }
    }
}

// ───────────────────────── Stage 4: Composited ───────────────────────

/// Final pipeline state.
#[must_use = "call .into_result() to take the composited image"]
pub struct Composited {
    original: RgbaImage,
    rect: CropRect,
    cropped: RgbaImage,
    mask: GrayImage,
    output: RgbaImage,
}

impl Composited {
    /// The circular output image.
    #[must_use]
    pub const fn output(&self) -> &RgbaImage {
        &self.output
    }

    /// Collect every intermediate into a [`StagedResult`].
    #[must_use]
    pub fn into_result(self) -> StagedResult {
        StagedResult {
            original: self.original,
            crop: self.rect,
            cropped: self.cropped,
            mask: self.mask,
            output: self.output,
        }
    }
}
