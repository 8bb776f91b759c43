// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The viewer keeps a single cumulative scale factor. Zoom In multiplies it
//! by the configured step factor, Zoom Out divides by it, and displaying a
//! new image resets it to [`DEFAULT_SCALE`].

pub use crate::config::{DEFAULT_SCALE, DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};

/// Zoom step factor, guaranteed to be within the valid range (1.01–4.0).
///
/// A factor of exactly 1.0 would make zoom a no-op, and anything below it
/// would swap the meaning of Zoom In and Zoom Out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new step factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
        } else {
            Self::default()
        }
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Manages the zoom of the displayed image.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    /// Current scale applied to the image's pixel dimensions (1.0 = 100%).
    scale: f32,
    /// Multiplier used by one Zoom In / Zoom Out step.
    factor: ZoomFactor,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomFactor::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(factor: ZoomFactor) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            factor,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn factor(&self) -> ZoomFactor {
        self.factor
    }

    /// Scale expressed as a rounded percentage, for the status bar.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Resets the scale to identity.
    pub fn reset(&mut self) {
        self.scale = DEFAULT_SCALE;
    }

    /// Multiplies the scale by one step. The result is not bounded.
    pub fn zoom_in(&mut self) {
        self.scale *= self.factor.value();
    }

    /// Divides the scale by one step. The result is not bounded.
    pub fn zoom_out(&mut self) {
        self.scale /= self.factor.value();
    }

    /// Applies the scale to a pixel dimension, for sizing the canvas.
    #[must_use]
    pub fn scaled(&self, pixels: u32) -> f32 {
        pixels as f32 * self.scale
    }
}
