//! Background classification and alpha masking.

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::image::{ALPHA_CHANNEL, TRANSPARENT};

/// Per-pixel background mask in `(row, column)` order.
pub type Mask = Array2<bool>;

/// Minimum channel intensity, exclusive, for a pixel to count as white.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Whether a pixel is near-white background.
///
/// Red, green and blue must each be strictly above `threshold`. Alpha is
/// ignored, so an already-cleared pixel still classifies the same way.
#[inline]
#[must_use]
pub fn is_background(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Classify every pixel of `img`.
#[must_use]
pub fn compute_mask(img: &RgbaImage, threshold: u8) -> Mask {
    let (width, height) = img.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        // Safe: indices are bounded by the image's own u32 dimensions
        #[allow(clippy::cast_possible_truncation)]
        let pixel = img.get_pixel(x as u32, y as u32);
        is_background(pixel, threshold)
    })
}

/// Make every masked pixel fully transparent.
///
/// Only alpha changes; the color channels of cleared pixels are kept.
/// Returns the number of pixels cleared.
#[allow(clippy::cast_possible_truncation)]
pub fn apply_mask(img: &mut RgbaImage, mask: &Mask) -> usize {
    debug_assert_eq!(
        mask.dim(),
        (img.height() as usize, img.width() as usize),
        "mask does not match image dimensions"
    );

    let mut cleared = 0;
    for ((y, x), &background) in mask.indexed_iter() {
        if background {
            img.get_pixel_mut(x as u32, y as u32)[ALPHA_CHANNEL] = TRANSPARENT;
            cleared += 1;
        }
    }

    cleared
}
