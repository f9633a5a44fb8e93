//! Centered square crop.
//!
//! The square's side is the shorter image axis. The longer axis is
//! trimmed equally from both ends; when the excess is odd, the extra
//! pixel comes off the far (right or bottom) edge.

use crate::types::{CropRect, Dimensions, RgbaImage};

/// Compute the largest centered square inside an image of `dimensions`.
///
/// Offsets use floor division: for a 101×80 image the square is 80 wide
/// and starts at `x = 10`.
#[must_use]
pub fn centered_square(dimensions: Dimensions) -> CropRect {
    let side = dimensions.min_side();
    CropRect {
        x: (dimensions.width - side) / 2,
        y: (dimensions.height - side) / 2,
        side,
    }
}

/// Copy `rect` out of `image` into a new buffer.
///
/// The rectangle must lie within the image; regions outside are clipped
/// by [`image::imageops::crop_imm`].
#[must_use]
pub fn crop(image: &RgbaImage, rect: CropRect) -> RgbaImage {
    image::imageops::crop_imm(image, rect.x, rect.y, rect.side, rect.side).to_image()
}

/// Crop `image` to its largest centered square.
#[must_use = "returns the cropped image"]
pub fn crop_centered_square(image: &RgbaImage) -> RgbaImage {
    crop(image, centered_square(Dimensions::of(image)))
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::test_support::coordinate_gradient;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn square_input_is_identity_rect() {
        assert_eq!(
            centered_square(dims(7, 7)),
            CropRect { x: 0, y: 0, side: 7 }
        );
    }

    #[test]
    fn odd_excess_biases_top_left() {
        assert_eq!(
            centered_square(dims(101, 80)),
            CropRect {
                x: 10,
                y: 0,
                side: 80
            }
        );
        assert_eq!(
            centered_square(dims(80, 101)),
            CropRect {
                x: 0,
                y: 10,
                side: 80
            }
        );
    }

    #[test]
    fn wide_rectangle_crops_horizontally() {
        assert_eq!(
            centered_square(dims(10, 6)),
            CropRect { x: 2, y: 0, side: 6 }
        );
    }

    #[test]
    fn empty_image_yields_empty_square() {
        assert_eq!(
            centered_square(dims(0, 12)),
            CropRect { x: 0, y: 6, side: 0 }
        );
    }

    #[test]
    fn output_is_square_of_min_side() {
        for (w, h) in [(1, 1), (3, 9), (9, 3), (64, 63), (17, 31)] {
            let img = coordinate_gradient(w, h);
            let cropped = crop_centered_square(&img);
            let side = w.min(h);
            assert_eq!(cropped.dimensions(), (side, side), "input {w}x{h}");
        }
    }

    #[test]
    fn crop_copies_pixels_from_offset() {
        let img = coordinate_gradient(10, 6);
        let cropped = crop_centered_square(&img);
        // Top-left of the crop is source (2, 0); bottom-right is (7, 5).
        assert_eq!(*cropped.get_pixel(0, 0), Rgba([2, 0, 0, 255]));
        assert_eq!(*cropped.get_pixel(5, 5), Rgba([7, 5, 0, 255]));
    }

    #[test]
    fn square_crop_is_identity_copy() {
        let img = coordinate_gradient(5, 5);
        assert_eq!(crop_centered_square(&img), img);
    }
}
