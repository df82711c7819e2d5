//! 3x3 color matrices and luma/chroma working spaces.

use glam::{DMat3, DVec3};

use crate::image::RgbImage8;

/// ITU-R BT.709 luminance weights for linear RGB.
pub const LUMA_REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// A 3x3 color matrix, stored row-major.
#[derive(Debug, Clone, Copy)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Apply this matrix to an RGB triplet.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        // glam matrices are column-major; transpose the row-major storage.
        let m = DMat3::from_cols_array_2d(&self.0).transpose();
        (m * DVec3::from_array(rgb)).to_array()
    }
}

/// Scalar luminance of a linear RGB triplet using BT.709 weights.
pub fn luminance(linear: [f64; 3]) -> f64 {
    linear[0] * LUMA_REC709[0] + linear[1] * LUMA_REC709[1] + linear[2] * LUMA_REC709[2]
}

/// An 8-bit working space with one luma channel (index 0) and two chroma channels.
///
/// Both directions quantize to 8 bits, so a round trip is exact only up to
/// quantization error.
pub trait LumaChromaSpace {
    /// Short lower-case name, used in log output.
    const NAME: &'static str;

    /// Encode an sRGB pixel as `[luma, chroma_1, chroma_2]`.
    fn encode(rgb: [u8; 3]) -> [u8; 3];

    /// Decode `[luma, chroma_1, chroma_2]` back to sRGB.
    fn decode(encoded: [u8; 3]) -> [u8; 3];
}

/// Convert a whole image into the working space `S`.
pub fn to_space<S: LumaChromaSpace>(image: &RgbImage8) -> RgbImage8 {
    image.map_pixels(S::encode)
}

/// Convert a whole image out of the working space `S`.
pub fn from_space<S: LumaChromaSpace>(encoded: &RgbImage8) -> RgbImage8 {
    encoded.map_pixels(S::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_matrix_applies_rows_to_vector() {
        let m = ColorMatrix([[1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.0, 0.5]]);
        let out = m.apply([1.0, 1.0, 2.0]);
        assert!((out[0] - 9.0).abs() < EPSILON);
        assert!((out[1] - 1.0).abs() < EPSILON);
        assert!((out[2] - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        assert!((luminance([1.0, 1.0, 1.0]) - 1.0).abs() < EPSILON);
        assert!((luminance([0.0, 1.0, 0.0]) - 0.7152).abs() < EPSILON);
    }
}
