//! Circular mask: a hard-edged disc stencil for a square image.
//!
//! The disc is inscribed in the full `side`×`side` square, touching all
//! four edges. A pixel belongs to the disc when its center lies within
//! `side / 2` of the square's center. There is no anti-aliasing: every
//! mask value is either [`OUTSIDE`] or [`INSIDE`].

use image::Luma;

use crate::types::{GrayImage, Point};

/// Mask value for pixels outside the circle.
pub const OUTSIDE: u8 = 0;

/// Mask value for pixels inside (or on) the circle.
pub const INSIDE: u8 = 255;

/// Build a `side`×`side` mask with an inscribed filled circle.
#[must_use = "returns the circle mask"]
pub fn circle_mask(side: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(side, side, Luma([OUTSIDE]));
    fill_inscribed_circle(&mut mask);
    mask
}

/// Fill the circle inscribed in `mask`'s square with [`INSIDE`].
///
/// Pixels outside the circle are left untouched. Non-square masks use
/// the shorter side as the diameter, centered on the image.
pub fn fill_inscribed_circle(mask: &mut GrayImage) {
    let (width, height) = mask.dimensions();
    let center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) / 2.0;
    let radius_sq = radius * radius;

    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        if is_inside(pixel_center(x, y), center, radius_sq) {
            *pixel = Luma([INSIDE]);
        }
    }
}

/// Number of pixels set to [`INSIDE`].
#[must_use]
pub fn coverage(mask: &GrayImage) -> u64 {
    mask.pixels()
        .map(|p| u64::from(u8::from(p.0[0] == INSIDE)))
        .sum()
}

/// The geometric center of pixel `(x, y)`.
fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Check if a point is inside or on the circle.
fn is_inside(p: Point, center: Point, radius_sq: f64) -> bool {
    p.distance_squared(center) <= radius_sq
}
