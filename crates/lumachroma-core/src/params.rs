//! Request-level color transfer parameters.
//!
//! `TransferParams` carries the mode as a plain string, exactly as it arrives
//! from a request or a JSON file. [`TransferParams::mode`] turns it into a
//! typed [`TransferMode`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combine::TransferMode;
use crate::error::TransferError;

/// Color transfer settings attached to a processing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferParams {
    /// One of `"lab"`, `"yuv"`, `"luminance"`. Default: `"lab"`.
    #[serde(default = "TransferParams::default_mode")]
    pub color_transfer_mode: String,
    /// Luminance ratio exponent, only read in `"luminance"` mode. Default: 1.0.
    #[serde(default = "TransferParams::default_strength")]
    pub color_transfer_strength: f64,
}

impl TransferParams {
    fn default_mode() -> String {
        TransferMode::Lab.name().to_string()
    }

    fn default_strength() -> f64 {
        1.0
    }

    /// Resolve the mode string.
    pub fn mode(&self) -> Result<TransferMode, TransferError> {
        TransferMode::from_name(&self.color_transfer_mode, self.color_transfer_strength)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read parameters from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ParamsLoadError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }
}

impl Default for TransferParams {
    fn default() -> Self {
        Self {
            color_transfer_mode: Self::default_mode(),
            color_transfer_strength: Self::default_strength(),
        }
    }
}

impl From<TransferMode> for TransferParams {
    fn from(mode: TransferMode) -> Self {
        Self {
            color_transfer_mode: mode.name().to_string(),
            color_transfer_strength: mode.strength().unwrap_or_else(Self::default_strength),
        }
    }
}

/// Errors that can occur while loading [`TransferParams`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ParamsLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid parameters JSON: {0}")]
    Json(#[from] serde_json::Error),
}
