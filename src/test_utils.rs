// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and scratch images.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Writes a small solid-color image named `name` into `dir` and returns its path.
///
/// The codec is picked from the extension, like Save As does.
pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]));
    let format = ImageFormat::from_path(&path).expect("test image needs a known extension");
    image_rs::DynamicImage::ImageRgba8(image)
        .to_rgb8()
        .save_with_format(&path, format)
        .expect("failed to write test image");
    path
}
