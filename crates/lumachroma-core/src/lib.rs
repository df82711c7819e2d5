//! Lumachroma Core — luminance/chroma color transfer.
//!
//! Combines the luminance of one RGB8 image with the chroma of another in
//! LAB, YUV, or linear light. Pure functions over in-memory images; no I/O
//! beyond optional parameter files.

pub mod analysis;
pub mod color_management;
pub mod combine;
pub mod error;
pub mod image;
pub mod params;

// Re-exports for convenience.
pub use combine::{TransferMode, combine, combine_named};
pub use error::{ImageError, TransferError};
pub use crate::image::{RgbImage8, Shape};
pub use params::TransferParams;
