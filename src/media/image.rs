// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, BMP, JPEG) plus the status line shown
//! for the displayed image.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, RgbaImage};
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Size of the source file on disk, in bytes.
    pub file_size: u64,
    /// Decoded RGBA bytes, kept for Save As.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>, file_size: u64) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            file_size,
            rgba_bytes,
        }
    }

    /// Returns a reference to the decoded RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Rebuilds an owned RGBA buffer for encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the stored bytes do not match the
    /// recorded dimensions.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec()).ok_or_else(|| {
            Error::Decode(format!(
                "pixel buffer does not match {}x{}",
                self.width, self.height
            ))
        })
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a decodable image ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let img_bytes = fs::read(path)?;
    let file_size = img_bytes.len() as u64;

    let img = image_rs::load_from_memory(&img_bytes)?;
    let (width, height) = img.dimensions();

    let pixels = img.to_rgba8().into_vec();
    log::debug!("decoded {} ({width}x{height}, {file_size} bytes)", path.display());

    Ok(ImageData::from_rgba(width, height, pixels, file_size))
}

/// Formats the status bar text for a displayed image:
/// `<path>, <width>x<height>, <size> Bytes`.
#[must_use]
pub fn status_line(path: &Path, image: &ImageData) -> String {
    format!(
        "{}, {}x{}, {} Bytes",
        path.display(),
        image.width,
        image.height,
        image.file_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save_with_format(&image_path, ImageFormat::Png)
            .expect("failed to write png");

        let data = load_image(&image_path).expect("failed to load png");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.rgba_bytes().len(), 4 * 2 * 4);
        assert_eq!(
            data.file_size,
            fs::metadata(&image_path).expect("metadata").len()
        );
    }

    #[test]
    fn load_bmp_and_jpg_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image = image_rs::RgbImage::from_pixel(3, 5, image_rs::Rgb([10, 20, 30]));

        let bmp_path = temp_dir.path().join("sample.bmp");
        image
            .save_with_format(&bmp_path, ImageFormat::Bmp)
            .expect("failed to write bmp");
        let jpg_path = temp_dir.path().join("sample.jpg");
        image
            .save_with_format(&jpg_path, ImageFormat::Jpeg)
            .expect("failed to write jpg");

        for path in [bmp_path, jpg_path] {
            let data = load_image(&path).expect("failed to load image");
            assert_eq!((data.width, data.height), (3, 5));
        }
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing.png");

        match load_image(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("failed to write file");

        match load_image(&path) {
            Err(Error::Decode(_)) => {}
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn status_line_matches_expected_format() {
        let data = ImageData::from_rgba(2, 3, vec![0; 2 * 3 * 4], 1234);
        let line = status_line(Path::new("/pictures/cat.png"), &data);
        assert_eq!(line, "/pictures/cat.png, 2x3, 1234 Bytes");
    }

    #[test]
    fn to_rgba_image_rejects_mismatched_buffer() {
        let data = ImageData::from_rgba(10, 10, vec![0; 8], 0);
        assert!(data.to_rgba_image().is_err());
    }
}
