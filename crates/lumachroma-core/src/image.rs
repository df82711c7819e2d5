//! Image representation for the color-transfer engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ImageError;

/// Array shape of an RGB8 image, reported as `(H, W, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Rows.
    pub height: u32,
    /// Columns.
    pub width: u32,
    /// Samples per pixel. Always 3 for [`RgbImage8`].
    pub channels: u32,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// Owned 8-bit RGB image, row-major, channel order R, G, B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage8 {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RgbImage8 {
    /// Wrap a pixel buffer. Fails if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `RGBRGB...` bytes.
    pub fn from_raw(width: u32, height: u32, bytes: &[u8]) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 3;
        let pixels: &[[u8; 3]] =
            bytemuck::try_cast_slice(bytes).map_err(|_| ImageError::BufferLength {
                expected,
                actual: bytes.len(),
            })?;
        if bytes.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    /// An image where every pixel is `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(H, W, 3)` shape used for precondition checks.
    pub fn shape(&self) -> Shape {
        Shape {
            height: self.height,
            width: self.width,
            channels: 3,
        }
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Interleaved byte view of the pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Apply `f` to every pixel, producing a new image of the same shape.
    pub fn map_pixels(&self, f: impl Fn([u8; 3]) -> [u8; 3]) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Combine with an equally-shaped image pixel by pixel.
    pub(crate) fn zip_map(
        &self,
        other: &Self,
        mut f: impl FnMut([u8; 3], [u8; 3]) -> [u8; 3],
    ) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .zip(&other.pixels)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl From<&::image::RgbImage> for RgbImage8 {
    fn from(img: &::image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl From<::image::RgbImage> for RgbImage8 {
    fn from(img: ::image::RgbImage) -> Self {
        Self::from(&img)
    }
}

impl From<RgbImage8> for ::image::RgbImage {
    fn from(img: RgbImage8) -> Self {
        let (width, height) = (img.width, img.height);
        ::image::RgbImage::from_fn(width, height, |x, y| {
            ::image::Rgb(img.pixels[y as usize * width as usize + x as usize])
        })
    }
}
