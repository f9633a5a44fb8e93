//! In-memory fixtures shared by the unit tests.

#![allow(clippy::unwrap_used)]

use image::{Rgba, RgbaImage};

/// A `width`×`height` image filled with a single color.
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

/// An image where every pixel encodes its own coordinates, so crops can
/// be checked for where they came from.
#[allow(clippy::cast_possible_truncation)]
pub fn coordinate_gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
}
