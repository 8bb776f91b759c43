// SPDX-License-Identifier: MPL-2.0
//! Image decoding, status metadata and Save As encoding.
//!
//! Both directions go through the `image` crate; this module only decides
//! which files are candidates and which codec a target name implies.

pub mod image;
pub mod save;

use std::path::Path;

pub use image::{load_image, status_line, ImageData};
pub use save::{save_image, validate_target, SaveFormat};

/// Supported image extensions.
pub mod extensions {
    /// Extensions shown by the open/save dialogs and matched by directory scans.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "bmp", "jpg"];

    /// Filter name used by the open/save dialogs.
    pub const IMAGE_FILTER_NAME: &str = "Images";
}

pub use extensions::IMAGE_EXTENSIONS;

/// Returns the lower-cased extension of `path` if it is a supported image one.
#[must_use]
pub fn supported_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Checks if a file name carries a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    supported_extension(path).is_some()
}
