//! Transfer function (OETF/EOTF) implementations.
//!
//! Transfer functions convert between non-linear (encoded) and linear light values.
//! Values are `f64` so that the linear-light path keeps full precision between
//! decode and re-encode.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// The decode threshold is the exact intersection of the linear and power
/// segments rather than the rounded `0.04045`.
///
/// ```text
/// to_linear:   V <= 0.0404482362771082 → V / 12.92
///              V >  0.0404482362771082 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const DECODE_CUT: f64 = 0.0404482362771082;
    const ENCODE_CUT: f64 = 0.0031308;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= Self::DECODE_CUT {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear > Self::ENCODE_CUT {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * linear
        }
    }
}

/// Decode an 8-bit sRGB pixel to normalized linear RGB.
pub fn srgb8_to_linear(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(|c| SrgbTransfer.to_linear(c as f64 / 255.0))
}

/// Encode linear RGB in `[0, 1]` back to 8-bit sRGB, rounding to nearest.
///
/// Inputs outside `[0, 1]` saturate.
pub fn linear_to_srgb8(linear: [f64; 3]) -> [u8; 3] {
    linear.map(|c| quantize_u8(255.0 * SrgbTransfer.to_encoded(c)))
}

/// Round to nearest and saturate into `0..=255`. NaN maps to 0.
pub fn quantize_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
