//! CIE L\*a\*b\* (D65) with the common 8-bit encoding.
//!
//! ```text
//! L8 = L × 255 / 100      L ∈ [0, 100]
//! a8 = a + 128
//! b8 = b + 128
//! ```
//!
//! Encoding decodes sRGB to linear light before the XYZ step; decoding clamps
//! out-of-gamut results into the sRGB cube before quantizing.

use palette::white_point::D65;
use palette::{FromColor, IntoColor, Lab, LinSrgb, Srgb};

use super::color_space::LumaChromaSpace;
use super::transfer::quantize_u8;

type LabD65 = Lab<D65, f32>;

const L_SCALE: f32 = 255.0 / 100.0;
const AB_OFFSET: f32 = 128.0;

/// 8-bit LAB working space.
#[derive(Debug, Clone, Copy)]
pub struct Lab8;

impl LumaChromaSpace for Lab8 {
    const NAME: &'static str = "lab";

    fn encode(rgb: [u8; 3]) -> [u8; 3] {
        let srgb: Srgb<f32> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
        let lin: LinSrgb<f32> = srgb.into_linear();
        let lab = LabD65::from_color(lin);
        [
            lab.l * L_SCALE,
            lab.a + AB_OFFSET,
            lab.b + AB_OFFSET,
        ]
        .map(|c| quantize_u8(f64::from(c)))
    }

    fn decode(encoded: [u8; 3]) -> [u8; 3] {
        let [l, a, b] = encoded.map(f32::from);
        let lab = LabD65::new(l / L_SCALE, a - AB_OFFSET, b - AB_OFFSET);
        let lin: LinSrgb<f32> = lab.into_color();
        let srgb: Srgb<f32> = Srgb::from_linear(lin);
        [srgb.red, srgb.green, srgb.blue]
            .map(|c| quantize_u8(f64::from(c.clamp(0.0, 1.0)) * 255.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_channel_diff(a: [u8; 3], b: [u8; 3]) -> i32 {
        (0..3)
            .map(|c| (a[c] as i32 - b[c] as i32).abs())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_black_and_white_endpoints() {
        assert_eq!(Lab8::encode([0, 0, 0]), [0, 128, 128]);
        assert_eq!(Lab8::encode([255, 255, 255]), [255, 128, 128]);
        assert_eq!(Lab8::decode([0, 128, 128]), [0, 0, 0]);
        assert_eq!(Lab8::decode([255, 128, 128]), [255, 255, 255]);
    }

    #[test]
    fn test_gray_has_neutral_chroma() {
        let lab = Lab8::encode([128, 128, 128]);
        // L* of sRGB 128 is ~53.6.
        assert!((lab[0] as i32 - 137).abs() <= 1, "{lab:?}");
        assert!((lab[1] as i32 - 128).abs() <= 1);
        assert!((lab[2] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_red_has_positive_a_and_b() {
        let lab = Lab8::encode([255, 0, 0]);
        assert!(lab[1] > 200, "{lab:?}");
        assert!(lab[2] > 180, "{lab:?}");
    }

    #[test]
    fn test_mid_range_colors_roundtrip_within_quantization() {
        for r in (64..=192).step_by(16) {
            for g in (64..=192).step_by(16) {
                for b in (64..=192).step_by(16) {
                    let px = [r as u8, g as u8, b as u8];
                    let back = Lab8::decode(Lab8::encode(px));
                    assert!(max_channel_diff(px, back) <= 4, "{px:?} -> {back:?}");
                }
            }
        }
    }
}
