//! Analog YUV with 8-bit offset chroma.
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! U = 0.492 (B − Y) + 128
//! V = 0.877 (R − Y) + 128
//!
//! R = Y + 1.140 (V − 128)
//! G = Y − 0.395 (U − 128) − 0.581 (V − 128)
//! B = Y + 2.032 (U − 128)
//! ```
//!
//! Y is rounded before it feeds the chroma differences, and every channel
//! saturates to `0..=255`. Strongly saturated colors therefore clip in U or V
//! and do not round-trip.

use super::color_space::{ColorMatrix, LumaChromaSpace};
use super::transfer::quantize_u8;

const CHROMA_OFFSET: f64 = 128.0;

const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];
const U_SCALE: f64 = 0.492;
const V_SCALE: f64 = 0.877;

/// `[Y, U − 128, V − 128]` to RGB.
const YUV_TO_RGB: ColorMatrix = ColorMatrix([
    [1.0, 0.0, 1.140],
    [1.0, -0.395, -0.581],
    [1.0, 2.032, 0.0],
]);

/// 8-bit YUV working space.
#[derive(Debug, Clone, Copy)]
pub struct Yuv8;

impl LumaChromaSpace for Yuv8 {
    const NAME: &'static str = "yuv";

    fn encode(rgb: [u8; 3]) -> [u8; 3] {
        let [r, g, b] = rgb.map(f64::from);
        let y = quantize_u8(r * LUMA_WEIGHTS[0] + g * LUMA_WEIGHTS[1] + b * LUMA_WEIGHTS[2]);
        let yf = f64::from(y);
        let u = quantize_u8((b - yf) * U_SCALE + CHROMA_OFFSET);
        let v = quantize_u8((r - yf) * V_SCALE + CHROMA_OFFSET);
        [y, u, v]
    }

    fn decode(encoded: [u8; 3]) -> [u8; 3] {
        let [y, u, v] = encoded.map(f64::from);
        YUV_TO_RGB
            .apply([y, u - CHROMA_OFFSET, v - CHROMA_OFFSET])
            .map(quantize_u8)
    }
}
