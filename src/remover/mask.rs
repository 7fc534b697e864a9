//! Near-white detection and clearing.

use image::{Rgba, RgbaImage};
use indicatif::ProgressBar;

/// Brightness above which a channel counts as white.
pub const DEFAULT_THRESHOLD: u8 = 230;

/// The value every cleared pixel takes: white, fully transparent.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Whether all three color channels of `pixel` strictly exceed `threshold`.
///
/// Alpha is ignored.
#[inline]
#[must_use]
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Replace every near-white pixel with [`TRANSPARENT_WHITE`] in place.
///
/// Returns the number of pixels that were cleared.
pub fn clear_near_white(img: &mut RgbaImage, threshold: u8) -> usize {
    clear_with_progress(img, threshold, &ProgressBar::hidden())
}

/// Same as [`clear_near_white`], advancing `pb` once per row.
pub(crate) fn clear_with_progress(img: &mut RgbaImage, threshold: u8, pb: &ProgressBar) -> usize {
    let mut cleared = 0;

    for (_, row) in img.enumerate_rows_mut() {
        for (_, _, pixel) in row {
            if is_near_white(pixel, threshold) {
                *pixel = TRANSPARENT_WHITE;
                cleared += 1;
            }
        }
        pb.inc(1);
    }

    cleared
}
