//! Color transfer mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TransferError;

/// Which color model combines the luminance and chroma sources.
///
/// Only [`TransferMode::Luminance`] takes a strength; the LAB and YUV paths
/// have nothing to tune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TransferMode {
    /// Replace L\* of the chroma image with L\* of the luminance image.
    #[default]
    Lab,
    /// Replace Y of the chroma image with Y of the luminance image.
    Yuv,
    /// Scale linear chroma RGB by `(Y_lum / Y_chroma) ^ strength`.
    Luminance {
        /// Exponent on the luminance ratio. 1.0 = neutral.
        strength: f64,
    },
}

impl TransferMode {
    /// Mode names accepted by [`TransferMode::from_name`].
    pub const NAMES: [&'static str; 3] = ["lab", "yuv", "luminance"];

    /// Resolve a mode name. `strength` is kept only for `"luminance"`.
    pub fn from_name(name: &str, strength: f64) -> Result<Self, TransferError> {
        match name {
            "lab" => Ok(Self::Lab),
            "yuv" => Ok(Self::Yuv),
            "luminance" => Ok(Self::Luminance { strength }),
            other => Err(TransferError::UnsupportedMode(other.to_string())),
        }
    }

    /// Lower-case name, the inverse of [`TransferMode::from_name`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Yuv => "yuv",
            Self::Luminance { .. } => "luminance",
        }
    }

    /// Strength for the luminance path, `None` for LAB and YUV.
    pub const fn strength(&self) -> Option<f64> {
        match self {
            Self::Luminance { strength } => Some(*strength),
            Self::Lab | Self::Yuv => None,
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Luminance { strength } => write!(f, "luminance (strength {strength})"),
            other => f.write_str(other.name()),
        }
    }
}
