//! Error types for the color-transfer engine and image construction.

use crate::image::Shape;

/// Precondition violations reported by [`combine`](crate::combine::combine).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransferError {
    #[error("image shapes differ: luminance {luminance} != chroma {chroma}")]
    ShapeMismatch { luminance: Shape, chroma: Shape },
    #[error("unsupported color transfer mode: {0:?}")]
    UnsupportedMode(String),
}

/// Errors raised while building an [`RgbImage8`](crate::image::RgbImage8).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("buffer length {actual} does not match {expected} expected for the given dimensions")]
    BufferLength { expected: usize, actual: usize },
}
