//! Image file I/O and resizing for the CLI.

use std::path::Path;

use image::imageops::FilterType;
use lumachroma_core::RgbImage8;

/// Load an image from disk and convert it to 8-bit RGB.
///
/// Supports common formats via the `image` crate. Alpha is dropped and
/// higher bit depths are reduced to 8 bits.
pub fn load_image(path: &Path) -> Result<RgbImage8, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    Ok(RgbImage8::from(img.to_rgb8()))
}

/// Write an image; the format follows the file extension.
pub fn save_image(path: &Path, img: RgbImage8) -> Result<(), ImageLoadError> {
    let buf: image::RgbImage = img.into();
    buf.save(path).map_err(ImageLoadError::Encode)
}

/// Resample to `width` × `height` with a bicubic filter. No-op when the size matches.
pub fn resize(img: RgbImage8, width: u32, height: u32) -> RgbImage8 {
    if img.width() == width && img.height() == height {
        return img;
    }
    let buf: image::RgbImage = img.into();
    RgbImage8::from(image::imageops::resize(&buf, width, height, FilterType::CatmullRom))
}

/// Errors that can occur during image loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resize_same_size_is_identity() {
        let img = RgbImage8::from_fn(4, 3, |x, y| [x as u8, y as u8, 9]);
        assert_eq!(resize(img.clone(), 4, 3), img);
    }

    #[test]
    fn test_resize_changes_dimensions() {
        let img = RgbImage8::filled(8, 8, [10, 20, 30]);
        let out = resize(img, 3, 5);
        assert_eq!((out.width(), out.height()), (3, 5));
        assert!(out.pixels().iter().all(|&px| px == [10, 20, 30]));
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let err = load_image(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbImage8::from_fn(5, 3, |x, y| [x as u8 * 40, y as u8 * 80, 200]);

        save_image(&path, img.clone()).unwrap();
        assert_eq!(load_image(&path).unwrap(), img);
    }

    #[test]
    fn test_save_unknown_extension_is_encode_error() {
        let dir = tempdir().unwrap();
        let err = save_image(&dir.path().join("out.nope"), RgbImage8::filled(1, 1, [0, 0, 0]))
            .unwrap_err();
        assert!(matches!(err, ImageLoadError::Encode(_)));
    }
}
