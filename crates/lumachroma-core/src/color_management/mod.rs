//! Color management: transfer functions and the 8-bit luma/chroma working spaces.

pub mod color_space;
pub mod lab;
pub mod transfer;
pub mod yuv;

pub use color_space::{LumaChromaSpace, luminance};
pub use lab::Lab8;
pub use yuv::Yuv8;
