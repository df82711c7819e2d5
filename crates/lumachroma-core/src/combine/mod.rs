//! Luminance/chroma combination, the color-transfer engine.
//!
//! Every entry point borrows its inputs and returns a freshly allocated image.
//! The LAB and YUV paths convert the chroma image into an owned buffer and
//! overwrite only its luma channel, so caller data is never aliased.

pub mod luminance;
pub mod mode;

pub use mode::TransferMode;

use crate::color_management::color_space::{LumaChromaSpace, from_space, to_space};
use crate::color_management::{Lab8, Yuv8};
use crate::error::TransferError;
use crate::image::RgbImage8;

/// Take luminance from `luminance_image` and chroma from `chroma_image`.
///
/// Fails with [`TransferError::ShapeMismatch`] before any conversion when
/// the two shapes differ.
pub fn combine(
    luminance_image: &RgbImage8,
    chroma_image: &RgbImage8,
    mode: TransferMode,
) -> Result<RgbImage8, TransferError> {
    check_shapes(luminance_image, chroma_image)?;
    tracing::debug!(%mode, shape = %chroma_image.shape(), "combining luminance and chroma");

    Ok(match mode {
        TransferMode::Lab => replace_luma::<Lab8>(luminance_image, chroma_image),
        TransferMode::Yuv => replace_luma::<Yuv8>(luminance_image, chroma_image),
        TransferMode::Luminance { strength } => {
            luminance::transfer(luminance_image, chroma_image, strength)
        }
    })
}

/// [`combine`] keyed by mode name, for callers holding request strings.
///
/// Shapes are checked first, then the name. `strength` is only read by
/// `"luminance"`.
pub fn combine_named(
    luminance_image: &RgbImage8,
    chroma_image: &RgbImage8,
    mode: &str,
    strength: f64,
) -> Result<RgbImage8, TransferError> {
    check_shapes(luminance_image, chroma_image)?;
    let mode = TransferMode::from_name(mode, strength)?;
    combine(luminance_image, chroma_image, mode)
}

fn check_shapes(
    luminance_image: &RgbImage8,
    chroma_image: &RgbImage8,
) -> Result<(), TransferError> {
    let (luminance, chroma) = (luminance_image.shape(), chroma_image.shape());
    if luminance != chroma {
        return Err(TransferError::ShapeMismatch { luminance, chroma });
    }
    Ok(())
}

/// Swap the luma channel of `chroma_image` in working space `S`.
fn replace_luma<S: LumaChromaSpace>(
    luminance_image: &RgbImage8,
    chroma_image: &RgbImage8,
) -> RgbImage8 {
    let luma = to_space::<S>(luminance_image);
    let chroma = to_space::<S>(chroma_image);
    let merged = chroma.zip_map(&luma, |c, l| [l[0], c[1], c[2]]);
    tracing::trace!(space = S::NAME, "luma channel replaced");
    from_space::<S>(&merged)
}
