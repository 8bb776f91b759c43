// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale factor of a freshly displayed image (identity transform).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Multiplier applied by one Zoom In step (Zoom Out divides by it).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.2;

/// Smallest accepted zoom factor; anything at or below 1.0 would not zoom.
pub const MIN_ZOOM_FACTOR: f32 = 1.01;

/// Largest accepted zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 4.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
