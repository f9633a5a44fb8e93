//! Integration test: run real files through the driver and the binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::Command;

use image::{Rgba, RgbaImage};
use roundel::{Config, Error, LoadError, SaveError, run};
use roundel_pipeline::ImageFormat;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// A fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path, img: &RgbaImage) {
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

#[test]
fn solid_red_square_becomes_red_disc() {
    let dir = scratch_dir("solid_red_square");
    let input = dir.join("red.png");
    let output = dir.join("red-circle.png");
    write_png(&input, &RgbaImage::from_pixel(4, 4, RED));

    let outcome = run(&Config {
        input: input.clone(),
        output: output.clone(),
        format: None,
    })
    .expect("run should succeed");

    assert_eq!(outcome.output, output);
    assert_eq!((outcome.dimensions.width, outcome.dimensions.height), (4, 4));
    assert!(outcome.bytes_written > 0);

    let result = read_rgba(&output);
    assert_eq!(result.dimensions(), (4, 4));
    assert_eq!(result.get_pixel(0, 0).0[3], 0);
    assert_eq!(*result.get_pixel(2, 2), RED);

    // The input fixture is untouched.
    assert_eq!(read_rgba(&input), RgbaImage::from_pixel(4, 4, RED));
}

#[test]
#[allow(clippy::cast_possible_truncation)]
fn rectangle_is_cropped_around_center() {
    let dir = scratch_dir("rectangle");
    let input = dir.join("wide.png");
    let output = dir.join("wide-circle.png");
    let source = RgbaImage::from_fn(10, 6, |x, y| Rgba([x as u8 * 20, y as u8 * 20, 0, 255]));
    write_png(&input, &source);

    run(&Config {
        input,
        output: output.clone(),
        format: None,
    })
    .unwrap();

    let result = read_rgba(&output);
    assert_eq!(result.dimensions(), (6, 6));
    // Crop origin is (2, 0): output (3, 3) is source (5, 3).
    assert_eq!(result.get_pixel(3, 3), source.get_pixel(5, 3));
    assert_eq!(result.get_pixel(0, 0).0[3], 0);
}

#[test]
fn in_place_overwrites_input() {
    let dir = scratch_dir("in_place");
    let path = dir.join("icon.png");
    write_png(&path, &RgbaImage::from_pixel(12, 8, RED));

    run(&Config::in_place(&path)).unwrap();

    let result = read_rgba(&path);
    assert_eq!(result.dimensions(), (8, 8));
    assert_eq!(result.get_pixel(0, 0).0[3], 0);
    assert_eq!(*result.get_pixel(4, 4), RED);
}

#[test]
fn jpeg_input_is_treated_as_opaque() {
    let dir = scratch_dir("jpeg_input");
    let input = dir.join("photo.jpg");
    let output = dir.join("photo.png");
    image::RgbImage::from_pixel(16, 16, image::Rgb([255, 255, 255]))
        .save_with_format(&input, ImageFormat::Jpeg)
        .unwrap();

    run(&Config {
        input,
        output: output.clone(),
        format: None,
    })
    .unwrap();

    let result = read_rgba(&output);
    assert_eq!(result.get_pixel(8, 8).0[3], 255);
    assert_eq!(result.get_pixel(0, 0).0[3], 0);
}

#[test]
fn format_override_ignores_extension() {
    let dir = scratch_dir("format_override");
    let input = dir.join("in.png");
    let output = dir.join("out.icon");
    write_png(&input, &RgbaImage::from_pixel(5, 5, RED));

    run(&Config {
        input,
        output: output.clone(),
        format: Some(ImageFormat::Png),
    })
    .unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn missing_input_is_load_error() {
    let dir = scratch_dir("missing_input");
    let err = run(&Config::in_place(dir.join("nope.png"))).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Read { .. })));
}

#[test]
fn garbage_input_is_load_error() {
    let dir = scratch_dir("garbage_input");
    let input = dir.join("garbage.png");
    std::fs::write(&input, b"definitely not an image").unwrap();
    let err = run(&Config::in_place(&input)).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Decode { .. })));
    // Nothing was written over the bad input.
    assert_eq!(std::fs::read(&input).unwrap(), b"definitely not an image");
}

#[test]
fn missing_output_directory_is_save_error() {
    let dir = scratch_dir("missing_output_dir");
    let input = dir.join("in.png");
    write_png(&input, &RgbaImage::from_pixel(3, 3, RED));

    let err = run(&Config {
        input,
        output: dir.join("no/such/dir/out.png"),
        format: None,
    })
    .unwrap_err();
    assert!(matches!(err, Error::Save(SaveError::Write { .. })));
}

#[test]
fn unknown_output_extension_is_save_error() {
    let dir = scratch_dir("unknown_extension");
    let input = dir.join("in.png");
    write_png(&input, &RgbaImage::from_pixel(3, 3, RED));

    let err = run(&Config {
        input,
        output: dir.join("out.xyz"),
        format: None,
    })
    .unwrap_err();
    assert!(matches!(err, Error::Save(SaveError::Format { .. })));
}

#[test]
fn binary_reports_success() {
    let dir = scratch_dir("binary_success");
    let input = dir.join("in.png");
    let output = dir.join("out.png");
    write_png(&input, &RgbaImage::from_pixel(6, 10, RED));

    let result = Command::new(env!("CARGO_BIN_EXE_roundel"))
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        format!("Created circular icon at {}", output.display())
    );
    assert_eq!(read_rgba(&output).dimensions(), (6, 6));
}

#[test]
fn binary_reports_failure_with_nonzero_exit() {
    let dir = scratch_dir("binary_failure");
    let missing = dir.join("missing.png");

    let result = Command::new(env!("CARGO_BIN_EXE_roundel"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.starts_with("Error: "), "stderr was: {stderr}");
    assert!(stderr.contains("missing.png"));
}

#[test]
fn binary_json_diagnostics() {
    let dir = scratch_dir("binary_json");
    let input = dir.join("in.png");
    let output = dir.join("out.png");
    write_png(&input, &RgbaImage::from_pixel(7, 7, RED));

    let result = Command::new(env!("CARGO_BIN_EXE_roundel"))
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .output()
        .unwrap();

    assert!(result.status.success());
    let json: serde_json::Value = serde_json::from_slice(&result.stderr).unwrap();
    assert_eq!(json["summary"]["output"]["width"], 7);
}

#[test]
fn binary_verbose_reports_progress_on_stderr() {
    let dir = scratch_dir("binary_verbose");
    let input = dir.join("in.png");
    let output = dir.join("out.png");
    write_png(&input, &RgbaImage::from_pixel(8, 5, RED));

    let result = Command::new(env!("CARGO_BIN_EXE_roundel"))
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-v")
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        format!("Created circular icon at {}", output.display())
    );
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.starts_with("Reading image from "), "stderr was: {stderr}");
    assert!(stderr.contains("Wrote 5x5 image"), "stderr was: {stderr}");
    assert!(stderr.contains("Pipeline Diagnostics Report"), "stderr was: {stderr}");
}

#[test]
fn binary_rejects_json_with_verbose() {
    let dir = scratch_dir("binary_json_verbose");
    let input = dir.join("in.png");
    let output = dir.join("out.png");
    write_png(&input, &RgbaImage::from_pixel(7, 7, RED));

    let result = Command::new(env!("CARGO_BIN_EXE_roundel"))
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .arg("-v")
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("cannot be used with"), "stderr was: {stderr}");
    assert!(!output.exists());
}

#[test]
fn load_image_rejects_garbage_as_decode_error() {
    let dir = scratch_dir("load_image_garbage");
    let input = dir.join("garbage.png");
    std::fs::write(&input, b"definitely not an image").unwrap();

    let err = roundel::io::load_image(&input).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
    assert!(err.to_string().contains("garbage.png"));
}

#[test]
fn load_image_normalizes_to_rgba() {
    let dir = scratch_dir("load_image");
    let input = dir.join("gray.png");
    image::GrayImage::from_pixel(3, 2, image::Luma([90]))
        .save_with_format(&input, ImageFormat::Png)
        .unwrap();

    let loaded = roundel::io::load_image(&input).unwrap();
    assert_eq!(loaded.dimensions(), (3, 2));
    assert_eq!(*loaded.get_pixel(2, 1), Rgba([90, 90, 90, 255]));
}

#[test]
fn save_image_reports_bytes_written() {
    let dir = scratch_dir("save_image");
    let output = dir.join("out.webp");
    let img = roundel_pipeline::circle_crop(&RgbaImage::from_pixel(9, 9, RED));

    let written = roundel::io::save_image(&img, &output, None).unwrap();
    assert_eq!(std::fs::metadata(&output).unwrap().len(), written as u64);
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
}
