//! roundel: turn an image file into a circular icon.
//!
//! Wires the sans-IO [`roundel_pipeline`] to the filesystem: read the
//! input, crop and mask it, write the output. The `roundel` binary is a
//! thin command-line shell over [`run`].

pub mod error;
pub mod io;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use roundel_pipeline::diagnostics::{Clock, PipelineDiagnostics, process_staged_with_diagnostics};
use roundel_pipeline::{Dimensions, ImageFormat};

pub use error::{Error, LoadError, SaveError};

/// Where to read from and write to.
///
/// Input and output are independent; pointing both at the same file
/// overwrites the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Image to transform.
    pub input: PathBuf,
    /// Destination of the circular image.
    pub output: PathBuf,
    /// Output encoding; inferred from `output`'s extension when `None`.
    pub format: Option<ImageFormat>,
}

impl Config {
    /// Transform `path` in place.
    #[must_use]
    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        let input = path.into();
        Self {
            output: input.clone(),
            input,
            format: None,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Path the image was written to.
    pub output: PathBuf,
    /// Dimensions of the written image (always square).
    pub dimensions: Dimensions,
    /// Size of the encoded output.
    pub bytes_written: usize,
    /// Per-stage timings and metrics.
    pub diagnostics: PipelineDiagnostics,
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}

/// Load `config.input`, cut out the centered circle, and write it to
/// `config.output`.
///
/// # Errors
///
/// Returns [`Error::Load`] if the input cannot be read or decoded.
/// Returns [`Error::Save`] if the output cannot be encoded or written.
pub fn run(config: &Config) -> Result<Outcome, Error> {
    let bytes = io::read_source(&config.input)?;
    let (staged, diagnostics) = io::decode_source(&config.input, &bytes, |bytes| {
        process_staged_with_diagnostics(bytes, &StdClock)
    })?;

    let dimensions = Dimensions::of(&staged.output);
    let bytes_written = io::save_image(&staged.output, &config.output, config.format)?;

    Ok(Outcome {
        output: config.output.clone(),
        dimensions,
        bytes_written,
        diagnostics,
    })
}
