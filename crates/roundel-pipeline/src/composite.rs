//! Mask-gated paste and the full circle compositor.
//!
//! [`paste_masked`] is a stencil paste, not a blend of alpha with alpha:
//! every channel of the result (including alpha) is interpolated between
//! the canvas and the source by the mask value. A mask of 0 keeps the
//! canvas pixel, a mask of 255 copies the source pixel bit-for-bit.

use image::Rgba;

use crate::crop::crop_centered_square;
use crate::mask::circle_mask;
use crate::types::{GrayImage, RgbaImage};

/// Fully transparent black, the background of every composited image.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Paste `source` onto `canvas` at the origin, gated by `mask`.
///
/// Only the region covered by all three images is touched; pixels of
/// `canvas` beyond `source` or `mask` keep their values.
pub fn paste_masked(canvas: &mut RgbaImage, source: &RgbaImage, mask: &GrayImage) {
    let width = canvas.width().min(source.width()).min(mask.width());
    let height = canvas.height().min(source.height()).min(mask.height());

    for y in 0..height {
        for x in 0..width {
            let m = mask.get_pixel(x, y).0[0];
            let src = source.get_pixel(x, y);
            let dst = canvas.get_pixel_mut(x, y);
            for (d, &s) in dst.0.iter_mut().zip(src.0.iter()) {
                *d = mix(*d, s, m);
            }
        }
    }
}

/// Interpolate one channel from `canvas` to `source` by `m / 255`, rounded.
#[allow(clippy::cast_possible_truncation)]
fn mix(canvas: u8, source: u8, m: u8) -> u8 {
    let m = u32::from(m);
    let value = u32::from(source) * m + u32::from(canvas) * (255 - m);
    // Max value is 255 * 255 + 127, so the quotient always fits in a u8.
    ((value + 127) / 255) as u8
}

/// Apply a circle mask to an already-square image.
///
/// The image is pasted onto a transparent canvas of the same size
/// through [`circle_mask`]; pixels outside the inscribed circle end up
/// as [`TRANSPARENT`].
#[must_use = "returns the masked image"]
pub fn mask_square(square: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(square.width(), square.height(), TRANSPARENT);
    paste_masked(&mut canvas, square, mask);
    canvas
}

/// Crop `image` to its centered square and cut out the inscribed circle.
///
/// The result is always `S`×`S` with `S = min(width, height)`. Inside
/// the circle every pixel equals the source exactly; outside it is
/// [`TRANSPARENT`].
#[must_use = "returns the circular image"]
pub fn circle_crop(image: &RgbaImage) -> RgbaImage {
    let square = crop_centered_square(image);
    let mask = circle_mask(square.width());
    mask_square(&square, &mask)
}
