//! lumachroma - recolor an image while keeping another image's luminance
//!
//! Takes luminance from the first input and chroma from the second, in LAB,
//! YUV, or linear light.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lumachroma_core::analysis::mean_luminance;
use lumachroma_core::{RgbImage8, TransferMode, TransferParams, combine};

mod config;
mod image_loader;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "lumachroma")]
#[command(author, version, about = "Combine the luminance of one image with the chroma of another")]
#[command(long_about = "
Combine the luminance of one image with the chroma of another.

Examples:
  lumachroma photo.png generated.png -o out.png
  lumachroma photo.png generated.png -o out.png --mode yuv
  lumachroma photo.png generated.png -o out.png --mode luminance --strength 1.5
  lumachroma photo.png generated.png -o out.png --resolution 512
  lumachroma photo.png generated.png -o out.png --params request.json

Defaults come from LUMACHROMA_MODE and LUMACHROMA_STRENGTH, then --params,
then explicit flags.
")]
struct Cli {
    /// Image that supplies luminance
    luminance: PathBuf,

    /// Image that supplies chroma
    chroma: PathBuf,

    /// Output image (format from extension)
    #[arg(short, long)]
    output: PathBuf,

    /// Transfer mode: lab, yuv, luminance
    #[arg(short, long)]
    mode: Option<String>,

    /// Luminance ratio exponent (luminance mode only)
    #[arg(short, long)]
    strength: Option<f64>,

    /// Resize both inputs to N x N before combining
    #[arg(short, long)]
    resolution: Option<u32>,

    /// JSON file with color_transfer_mode / color_transfer_strength
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_mode(cli: &Cli) -> Result<TransferMode> {
    let file = cli
        .params
        .as_deref()
        .map(|path| {
            TransferParams::load(path)
                .with_context(|| format!("Failed to read params: {}", path.display()))
        })
        .transpose()?;
    let params = AppConfig::default().resolve(file, cli.mode.clone(), cli.strength);

    match params.mode()? {
        TransferMode::Luminance { strength } if !(strength.is_finite() && strength > 0.0) => {
            bail!("Strength must be a positive number, got {strength}")
        }
        mode => Ok(mode),
    }
}

/// Output size: `resolution` x `resolution` if given, else the luminance image's size.
fn target_size(resolution: Option<u32>, luma: &RgbImage8) -> Result<(u32, u32)> {
    match resolution {
        Some(0) => bail!("Resolution must be at least 1"),
        Some(n) => Ok((n, n)),
        None => Ok((luma.width(), luma.height())),
    }
}

fn resize_input(label: &str, img: RgbImage8, width: u32, height: u32) -> RgbImage8 {
    if img.width() != width || img.height() != height {
        debug!(
            "Resizing {label} {}x{} -> {width}x{height}",
            img.width(),
            img.height()
        );
    }
    image_loader::resize(img, width, height)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = resolve_mode(&cli)?;

    let luma = image_loader::load_image(&cli.luminance)
        .with_context(|| format!("Failed to load {}", cli.luminance.display()))?;
    let chroma = image_loader::load_image(&cli.chroma)
        .with_context(|| format!("Failed to load {}", cli.chroma.display()))?;

    let (width, height) = target_size(cli.resolution, &luma)?;
    let luma = resize_input("luminance", luma, width, height);
    let chroma = resize_input("chroma", chroma, width, height);

    info!("Combining {width}x{height} with mode {mode}");
    let out = combine(&luma, &chroma, mode)?;
    debug!(
        "Mean luminance: source {:.4}, chroma {:.4}, result {:.4}",
        mean_luminance(&luma),
        mean_luminance(&chroma),
        mean_luminance(&out)
    );

    image_loader::save_image(&cli.output, out)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!("Wrote {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    fn parse(extra: &[&str]) -> Cli {
        let args = ["lumachroma", "a.png", "b.png", "-o", "c.png"];
        Cli::try_parse_from(args.iter().chain(extra).copied()).unwrap()
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&["--mode", "luminance", "--strength", "1.5"]);
        assert_eq!(cli.mode.as_deref(), Some("luminance"));
        assert_eq!(cli.strength, Some(1.5));
        assert_eq!(cli.resolution, None);
    }

    #[test]
    fn test_output_is_required() {
        assert!(Cli::try_parse_from(["lumachroma", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_resolve_mode_rejects_non_positive_strength() {
        let cli = parse(&["--mode", "luminance", "--strength", "0"]);
        assert!(resolve_mode(&cli).is_err());
        let cli = parse(&["--mode", "luminance", "--strength", "-1.5"]);
        assert!(resolve_mode(&cli).is_err());
    }

    #[test]
    fn test_resolve_mode_ignores_strength_outside_luminance() {
        let cli = parse(&["--mode", "lab", "--strength", "0"]);
        assert_eq!(resolve_mode(&cli).unwrap(), TransferMode::Lab);
        let cli = parse(&["--mode", "yuv", "--strength", "-2"]);
        assert_eq!(resolve_mode(&cli).unwrap(), TransferMode::Yuv);
    }

    #[test]
    fn test_resolve_mode_rejects_unknown_mode() {
        let cli = parse(&["--mode", "hsv"]);
        let err = resolve_mode(&cli).unwrap_err();
        assert!(err.to_string().contains("hsv"));
    }

    #[test]
    fn test_target_size_uses_square_resolution() {
        let luma = RgbImage8::filled(64, 32, [0, 0, 0]);
        assert_eq!(target_size(Some(512), &luma).unwrap(), (512, 512));
    }

    #[test]
    fn test_target_size_defaults_to_luminance_size() {
        let luma = RgbImage8::filled(64, 32, [0, 0, 0]);
        assert_eq!(target_size(None, &luma).unwrap(), (64, 32));
    }

    #[test]
    fn test_target_size_rejects_zero() {
        let luma = RgbImage8::filled(64, 32, [0, 0, 0]);
        let err = target_size(Some(0), &luma).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_resize_input_matches_target() {
        let img = RgbImage8::filled(8, 4, [50, 60, 70]);
        let out = resize_input("chroma", img, 2, 2);
        assert_eq!((out.width(), out.height()), (2, 2));
    }
}
