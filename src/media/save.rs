// SPDX-License-Identifier: MPL-2.0
//! Save As: picks the codec from the target name and writes the displayed
//! bitmap with the `image` crate.

use crate::error::SaveError;
use crate::media::{supported_extension, ImageData};
use image_rs::{DynamicImage, ImageFormat};
use std::path::Path;

/// Output formats accepted by Save As.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Bmp,
    Jpeg,
}

impl SaveFormat {
    /// Detects format from a lower-cased file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<SaveFormat> {
        match ext {
            "png" => Some(SaveFormat::Png),
            "bmp" => Some(SaveFormat::Bmp),
            "jpg" => Some(SaveFormat::Jpeg),
            _ => None,
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Bmp => "bmp",
            SaveFormat::Jpeg => "jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            SaveFormat::Png => ImageFormat::Png,
            SaveFormat::Bmp => ImageFormat::Bmp,
            SaveFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Checks that `path` names a file `<stem>.<png|bmp|jpg>` (extension compared
/// case-insensitively, stem non-empty) and returns the implied format.
///
/// # Errors
///
/// Returns [`SaveError::BadFormatOrFilename`] for any other name.
pub fn validate_target(path: &Path) -> Result<SaveFormat, SaveError> {
    let has_stem = path
        .file_stem()
        .is_some_and(|stem| !stem.is_empty());
    if !has_stem {
        return Err(SaveError::BadFormatOrFilename);
    }

    supported_extension(path)
        .as_deref()
        .and_then(SaveFormat::from_extension)
        .ok_or(SaveError::BadFormatOrFilename)
}

/// Encodes `image` to `path` using the codec implied by its extension.
///
/// Nothing is written when the name is rejected.
///
/// # Errors
///
/// Returns [`SaveError::BadFormatOrFilename`] for a rejected name and
/// [`SaveError::Encode`] when encoding or writing fails.
pub fn save_image(image: &ImageData, path: &Path) -> Result<SaveFormat, SaveError> {
    let format = validate_target(path)?;

    let rgba = image
        .to_rgba_image()
        .map_err(|err| SaveError::Encode(err.to_string()))?;

    // JPEG has no alpha channel
    let result = if format == SaveFormat::Jpeg {
        DynamicImage::ImageRgba8(rgba)
            .to_rgb8()
            .save_with_format(path, format.image_format())
    } else {
        rgba.save_with_format(path, format.image_format())
    };

    result.map_err(|err| SaveError::Encode(err.to_string()))?;
    log::info!("saved {} as {}", path.display(), format.extension());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_image() -> ImageData {
        let mut pixels = Vec::new();
        for i in 0..6u8 {
            pixels.extend_from_slice(&[i * 40, 255 - i * 40, i, 255]);
        }
        ImageData::from_rgba(3, 2, pixels, 0)
    }

    #[test]
    fn validate_target_accepts_supported_extensions_case_insensitively() {
        assert_eq!(
            validate_target(Path::new("/tmp/foo.png")),
            Ok(SaveFormat::Png)
        );
        assert_eq!(
            validate_target(Path::new("/tmp/foo.BMP")),
            Ok(SaveFormat::Bmp)
        );
        assert_eq!(
            validate_target(Path::new("/tmp/foo.Jpg")),
            Ok(SaveFormat::Jpeg)
        );
    }

    #[test]
    fn validate_target_accepts_dotted_stems() {
        assert_eq!(validate_target(Path::new("/tmp/..png")), Ok(SaveFormat::Png));
        assert_eq!(validate_target(Path::new("/tmp/a.b.png")), Ok(SaveFormat::Png));
    }

    #[test]
    fn validate_target_rejects_bad_names() {
        for name in ["/tmp/foo.txt", "/tmp/foo", "/tmp/foo.jpeg", "/tmp/.png", "/tmp/foo.png.txt"] {
            assert_eq!(
                validate_target(Path::new(name)),
                Err(SaveError::BadFormatOrFilename),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn save_png_preserves_pixels() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let target = temp_dir.path().join("copy.png");
        let image = sample_image();

        let format = save_image(&image, &target).expect("save should succeed");
        assert_eq!(format, SaveFormat::Png);

        let reloaded = image_rs::open(&target).expect("saved png should decode");
        assert_eq!(reloaded.to_rgba8().into_raw(), image.rgba_bytes());
    }

    #[test]
    fn save_jpg_and_bmp_produce_decodable_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image = sample_image();

        for name in ["copy.jpg", "copy.bmp"] {
            let target = temp_dir.path().join(name);
            save_image(&image, &target).expect("save should succeed");
            let reloaded = image_rs::open(&target).expect("saved file should decode");
            assert_eq!(reloaded.width(), 3);
            assert_eq!(reloaded.height(), 2);
        }
    }

    #[test]
    fn save_with_bad_name_writes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let target = temp_dir.path().join("foo.txt");

        let result = save_image(&sample_image(), &target);
        assert_eq!(result, Err(SaveError::BadFormatOrFilename));
        assert!(!target.exists());
    }

    #[test]
    fn save_into_missing_directory_reports_encode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let target = temp_dir.path().join("missing").join("foo.png");

        let result = save_image(&sample_image(), &target);
        assert!(matches!(result, Err(SaveError::Encode(_))));
    }
}
