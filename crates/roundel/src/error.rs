//! Load and save failures, as reported to the user.

use std::io;
use std::path::PathBuf;

use roundel_pipeline::PipelineError;

/// The input image could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file was read but is not a decodable image.
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        /// The input path.
        path: PathBuf,
        /// The decoder's error.
        source: PipelineError,
    },
}

/// The output image could not be written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// No encoder matches the output path.
    #[error("cannot choose a format for {}: {source}", path.display())]
    Format {
        /// The output path.
        path: PathBuf,
        /// Why the format was rejected.
        source: PipelineError,
    },

    /// The encoder rejected the image.
    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        /// The output path.
        path: PathBuf,
        /// The encoder's error.
        source: PipelineError,
    },

    /// The encoded bytes could not be written, e.g. the directory does
    /// not exist or is read-only.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Any failure of a single run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or decoding the input failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Encoding or writing the output failed.
    #[error(transparent)]
    Save(#[from] SaveError),
}
