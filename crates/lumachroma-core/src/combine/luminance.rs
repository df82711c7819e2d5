//! Linear-light luminance ratio transfer.
//!
//! ```text
//! lum_lin, chroma_lin = srgb_to_linear(lum), srgb_to_linear(chroma)
//! k   = (Y(lum_lin) / Y(chroma_lin)) ^ strength
//! out = linear_to_srgb(clamp(chroma_lin × k, 0, 1))
//! ```
//!
//! The division follows IEEE semantics. The clamp then maps NaN to 0 and
//! ±Inf to the nearest bound, so a black chroma pixel (Y = 0, all channels 0)
//! always stays black: `0 × Inf` and `0 / 0` are both NaN.

use crate::color_management::luminance;
use crate::color_management::transfer::{linear_to_srgb8, srgb8_to_linear};
use crate::image::RgbImage8;

/// Clamp to `[0, 1]`, sending NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Recolor one pixel. Returns the pixel and whether the ratio was non-finite.
pub fn transfer_pixel(luma_px: [u8; 3], chroma_px: [u8; 3], strength: f64) -> ([u8; 3], bool) {
    let luma_lin = srgb8_to_linear(luma_px);
    let chroma_lin = srgb8_to_linear(chroma_px);
    let scale = (luminance(luma_lin) / luminance(chroma_lin)).powf(strength);
    let out = chroma_lin.map(|c| clamp_unit(c * scale));
    (linear_to_srgb8(out), !scale.is_finite())
}

/// Apply the luminance transfer to every pixel. Shapes are checked by the caller.
pub(crate) fn transfer(luma: &RgbImage8, chroma: &RgbImage8, strength: f64) -> RgbImage8 {
    let mut non_finite = 0usize;
    let out = luma.zip_map(chroma, |l, c| {
        let (px, degenerate) = transfer_pixel(l, c, strength);
        non_finite += usize::from(degenerate);
        px
    });

    if non_finite > 0 {
        tracing::debug!(non_finite, "luminance ratio was non-finite; clamped");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit_policy() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn test_same_pixel_at_unit_strength_is_unchanged() {
        for px in [[1, 2, 3], [128, 64, 200], [255, 255, 255], [10, 0, 0]] {
            assert_eq!(transfer_pixel(px, px, 1.0), (px, false));
        }
    }

    #[test]
    fn test_black_chroma_stays_black() {
        let (px, degenerate) = transfer_pixel([200, 200, 200], [0, 0, 0], 1.0);
        assert_eq!(px, [0, 0, 0]);
        assert!(degenerate);
    }

    #[test]
    fn test_black_luminance_source_gives_black() {
        let (px, degenerate) = transfer_pixel([0, 0, 0], [90, 140, 30], 1.0);
        assert_eq!(px, [0, 0, 0]);
        assert!(!degenerate);
    }

    #[test]
    fn test_gray_chroma_takes_luminance_source_gray_level() {
        // Neutral chroma scaled to the luminance of a neutral source is that source.
        let (px, _) = transfer_pixel([180, 180, 180], [90, 90, 90], 1.0);
        assert_eq!(px, [180, 180, 180]);
    }

    #[test]
    fn test_bright_ratio_saturates_channels() {
        let (px, _) = transfer_pixel([255, 255, 255], [40, 10, 10], 3.0);
        assert_eq!(px[0], 255);
    }

    #[test]
    fn test_transfer_keeps_dimensions() {
        let luma = RgbImage8::filled(3, 2, [100, 100, 100]);
        let chroma = RgbImage8::from_fn(3, 2, |x, y| [x as u8 * 40 + 20, y as u8 * 50 + 30, 60]);
        let out = transfer(&luma, &chroma, 1.0);
        assert_eq!(out.shape(), chroma.shape());
    }
}
