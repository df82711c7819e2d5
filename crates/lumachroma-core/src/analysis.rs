//! Image statistics in linear light.

use crate::color_management::luminance;
use crate::color_management::transfer::srgb8_to_linear;
use crate::image::RgbImage8;

/// Mean BT.709 luminance of the linearized image, in `[0, 1]`.
///
/// Returns 0.0 for an empty image.
pub fn mean_luminance(image: &RgbImage8) -> f64 {
    let pixels = image.pixels();
    if pixels.is_empty() {
        return 0.0;
    }
    let sum: f64 = pixels
        .iter()
        .map(|&px| luminance(srgb8_to_linear(px)))
        .sum();
    sum / pixels.len() as f64
}
