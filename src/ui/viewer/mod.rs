// SPDX-License-Identifier: MPL-2.0
//! Image viewer: the displayed image, its zoom and the canvas that shows it.

pub mod pane;
pub mod state;

pub use state::{LoadedImage, ViewerState};
