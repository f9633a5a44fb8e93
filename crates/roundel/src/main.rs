//! roundel: crop an image to its centered square and cut out a circle.
//!
//! Everything outside the inscribed circle becomes transparent. By default
//! the input file is overwritten in place.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin roundel -- [OPTIONS] [INPUT]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use roundel::{Config, Outcome};
use roundel_pipeline::ImageFormat;

/// Turn an image into a circular icon with transparent corners.
///
/// The image is cropped to its largest centered square, then everything
/// outside the circle inscribed in that square is made transparent.
#[derive(Parser)]
#[command(name = "roundel", version)]
struct Cli {
    /// Input image path (PNG, JPEG, BMP, WebP).
    #[arg(default_value = "assets/icon.png")]
    input: PathBuf,

    /// Output image path. Defaults to overwriting the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print per-stage progress and a diagnostics report to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print diagnostics as JSON to stderr. Cannot be combined with
    /// `--verbose`, so stderr holds only the JSON document.
    #[arg(long, conflicts_with = "verbose")]
    json: bool,
}

/// Output format selection.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Lossless, keeps transparency.
    Png,
    /// Lossy, transparent corners are flattened to black.
    Jpeg,
    /// Uncompressed bitmap with alpha.
    Bmp,
    /// Lossless WebP, keeps transparency.
    Webp,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => Self::Png,
            Format::Jpeg => Self::Jpeg,
            Format::Bmp => Self::Bmp,
            Format::Webp => Self::WebP,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone().unwrap_or_else(|| self.input.clone()),
            format: self.format.map(ImageFormat::from),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if cli.verbose {
        eprintln!("Reading image from {}", config.input.display());
    }

    match roundel::run(&config) {
        Ok(outcome) => {
            report(&cli, &outcome);
            println!("Created circular icon at {}", outcome.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print optional progress and diagnostics to stderr.
fn report(cli: &Cli, outcome: &Outcome) {
    if cli.verbose {
        eprintln!(
            "Wrote {}x{} image ({} bytes) to {}",
            outcome.dimensions.width,
            outcome.dimensions.height,
            outcome.bytes_written,
            outcome.output.display(),
        );
        eprintln!("{}", outcome.diagnostics.report());
    }
    if cli.json {
        match serde_json::to_string_pretty(&outcome.diagnostics) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("Error serializing diagnostics: {e}"),
        }
    }
}
