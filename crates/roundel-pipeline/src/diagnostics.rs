//! Pipeline diagnostics: timing and size metrics for each stage.
//!
//! Timestamps come from a caller-supplied [`Clock`], keeping this crate
//! free of any platform time source. Durations are serialized as
//! fractional seconds (`f64`) for JSON compatibility, since
//! `std::time::Duration` does not implement serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mask::coverage;
use crate::pipeline::Pipeline;
use crate::types::{CropRect, Dimensions, PipelineError, StagedResult};

/// Source of timestamps for stage timing.
pub trait Clock {
    /// Opaque point in time.
    type Instant;

    /// The current instant.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// Stage 0: decoding and RGBA normalization.
    pub decode: StageDiagnostics,
    /// Stage 1: centered square crop.
    pub crop: StageDiagnostics,
    /// Stage 2: circle stencil rasterization.
    pub mask: StageDiagnostics,
    /// Stage 3: masked paste onto the transparent canvas.
    pub composite: StageDiagnostics,
    /// Total wall-clock duration of the entire pipeline (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary of the run.
    pub summary: PipelineSummary,
}

/// Diagnostics for a single pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Image decoding metrics.
    Decode {
        /// Size of the input image bytes.
        input_bytes: usize,
        /// Decoded image width in pixels.
        width: u32,
        /// Decoded image height in pixels.
        height: u32,
        /// Total pixel count (`width * height`).
        pixel_count: u64,
    },
    /// Square crop metrics.
    Crop {
        /// The square taken from the source.
        rect: CropRect,
        /// Source pixels discarded by the crop.
        discarded_pixels: u64,
    },
    /// Circle stencil metrics.
    Mask {
        /// Diameter of the circle in pixels.
        diameter: u32,
        /// Pixels inside the circle.
        inside_pixels: u64,
        /// Fraction of the square covered by the circle.
        coverage: f64,
    },
    /// Composite metrics.
    Composite {
        /// Output width in pixels.
        width: u32,
        /// Output height in pixels.
        height: u32,
        /// Output pixels with zero alpha.
        transparent_pixels: u64,
    },
}

/// High-level summary for the entire pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Source image dimensions.
    pub source: Dimensions,
    /// Output image dimensions.
    pub output: Dimensions,
}

/// Run the staged pipeline, timing each stage with `clock`.
///
/// # Errors
///
/// Same as [`Pending::decode`](crate::pipeline::Pending::decode).
pub fn process_staged_with_diagnostics<C: Clock>(
    image_bytes: &[u8],
    clock: &C,
) -> Result<(StagedResult, PipelineDiagnostics), PipelineError> {
    let start = clock.now();

    let t = clock.now();
    let decoded = Pipeline::new(image_bytes.to_vec()).decode()?;
    let source = decoded.dimensions();
    let decode = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Decode {
            input_bytes: image_bytes.len(),
            width: source.width,
            height: source.height,
            pixel_count: source.pixel_count(),
        },
    };

    let t = clock.now();
    let cropped = decoded.crop();
    let rect = cropped.crop_rect();
    let crop = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Crop {
            rect,
            discarded_pixels: source.pixel_count() - rect.dimensions().pixel_count(),
        },
    };

    let t = clock.now();
    let masked = cropped.mask();
    let duration = clock.elapsed(&t);
    let inside_pixels = coverage(masked.mask());
    let mask = StageDiagnostics {
        duration,
        metrics: StageMetrics::Mask {
            diameter: rect.side,
            inside_pixels,
            coverage: fraction(inside_pixels, rect.dimensions().pixel_count()),
        },
    };

    let t = clock.now();
    let composited = masked.composite();
    let duration = clock.elapsed(&t);
    let output = Dimensions::of(composited.output());
    let composite = StageDiagnostics {
        duration,
        metrics: StageMetrics::Composite {
            width: output.width,
            height: output.height,
            transparent_pixels: count_transparent(composited.output()),
        },
    };

    let staged = composited.into_result();
    let diagnostics = PipelineDiagnostics {
        decode,
        crop,
        mask,
        composite,
        total_duration: clock.elapsed(&start),
        summary: PipelineSummary { source, output },
    };
    Ok((staged, diagnostics))
}

impl PipelineDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Pipeline Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Image: {}x{} -> {}x{}",
            self.summary.source.width,
            self.summary.source.height,
            self.summary.output.width,
            self.summary.output.height,
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<24} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(80));

        let total_ms = duration_ms(self.total_duration);
        let stages = [
            ("Decode", &self.decode),
            ("Crop", &self.crop),
            ("Mask", &self.mask),
            ("Composite", &self.composite),
        ];

        for (name, diag) in stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<24} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// `part / whole`, or 0 for an empty whole.
#[allow(clippy::cast_precision_loss)]
fn fraction(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Count pixels with zero alpha.
fn count_transparent(image: &crate::RgbaImage) -> u64 {
    image
        .pixels()
        .map(|p| u64::from(u8::from(p.0[3] == 0)))
        .sum()
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Decode {
            input_bytes,
            width,
            height,
            ..
        } => format!("{input_bytes} bytes -> {width}x{height}"),
        StageMetrics::Crop {
            rect,
            discarded_pixels,
        } => format!(
            "side={} at ({}, {}), {discarded_pixels} px discarded",
            rect.side, rect.x, rect.y,
        ),
        StageMetrics::Mask {
            diameter,
            inside_pixels,
            coverage,
        } => format!(
            "d={diameter}px inside={inside_pixels} ({:.1}%)",
            coverage * 100.0,
        ),
        StageMetrics::Composite {
            width,
            height,
            transparent_pixels,
        } => format!("{width}x{height}, {transparent_pixels} transparent"),
    }
}
