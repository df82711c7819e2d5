//! Runtime defaults for the CLI.

use lumachroma_core::TransferParams;

/// Default mode when neither a flag, a params file, nor the environment sets one.
const DEFAULT_MODE: &str = "lab";
/// Default luminance-ratio exponent.
const DEFAULT_STRENGTH: f64 = 1.0;

/// Environment-backed defaults, overridden by `--params` and explicit flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Transfer mode name (`LUMACHROMA_MODE`).
    pub mode: String,
    /// Luminance-ratio exponent (`LUMACHROMA_STRENGTH`).
    pub strength: f64,
}

impl AppConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            mode: lookup("LUMACHROMA_MODE").unwrap_or_else(|| DEFAULT_MODE.to_string()),
            strength: lookup("LUMACHROMA_STRENGTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_STRENGTH),
        }
    }

    /// Layer a params file and explicit flags over these defaults.
    pub fn resolve(
        &self,
        file: Option<TransferParams>,
        mode: Option<String>,
        strength: Option<f64>,
    ) -> TransferParams {
        let base = file.unwrap_or_else(|| TransferParams {
            color_transfer_mode: self.mode.clone(),
            color_transfer_strength: self.strength,
        });
        TransferParams {
            color_transfer_mode: mode.unwrap_or(base.color_transfer_mode),
            color_transfer_strength: strength.unwrap_or(base.color_transfer_strength),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
