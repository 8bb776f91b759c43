// SPDX-License-Identifier: MPL-2.0
//! `image_viewer` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens PNG, BMP and JPEG files, zooms them, steps through the images of
//! the same directory and saves the displayed image under a new name.
//!
//! The services are usable without a window:
//! - [`directory_scanner`] - previous/next lookup in the current directory
//! - [`media`] - decoding, status line and Save As encoding
//! - [`ui::viewer::ViewerState`] - the viewer state machine the GUI drives

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
