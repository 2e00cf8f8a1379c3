// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the grid and the modal viewer.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Raster formats the gallery recognizes. Matches the codecs compiled into
/// the image backend.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes, shared so clones stay cheap.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Approximate memory footprint, used for preload cache accounting.
    pub fn byte_size(&self) -> usize {
        self.rgba_bytes.len()
    }
}

/// Checks whether a path looks like an image the viewer can decode.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Load an image from the given path and decode it to RGBA.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// decoding fails.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.byte_size(), 4 * 2 * 4);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn is_supported_image_matches_known_extensions() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("photo.txt")));
        assert!(!is_supported_image(Path::new("photo")));
    }
}
