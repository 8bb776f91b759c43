// SPDX-License-Identifier: MPL-2.0
//! Viewer state: the displayed image, its zoom and its status line.
//!
//! The path and the decoded bitmap live together in [`LoadedImage`], so the
//! viewer either has both or neither.

use crate::directory_scanner::{self, Direction};
use crate::error::{NavigationError, Result, SaveError};
use crate::media::{self, ImageData, SaveFormat};
use crate::ui::state::{ZoomFactor, ZoomState};
use std::path::{Path, PathBuf};

/// An image currently shown on the canvas.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub image: ImageData,
    /// `<path>, <width>x<height>, <size> Bytes`
    pub status: String,
}

impl LoadedImage {
    fn new(path: PathBuf, image: ImageData) -> Self {
        let status = media::status_line(&path, &image);
        Self {
            path,
            image,
            status,
        }
    }

    /// File name used in the window title.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    current: Option<LoadedImage>,
    zoom: ZoomState,
}

impl ViewerState {
    #[must_use]
    pub fn new(zoom_factor: ZoomFactor) -> Self {
        Self {
            current: None,
            zoom: ZoomState::new(zoom_factor),
        }
    }

    /// Decodes `path` and makes it the displayed image with zoom reset to 1.0.
    ///
    /// # Errors
    ///
    /// Returns the read or decode error; the previous image, zoom and
    /// status are kept in that case.
    pub fn display(&mut self, path: &Path) -> Result<&LoadedImage> {
        let image = media::load_image(path)?;
        log::info!("displaying {}", path.display());

        self.zoom.reset();
        let loaded = self
            .current
            .insert(LoadedImage::new(path.to_path_buf(), image));
        Ok(&*loaded)
    }

    /// Moves to the previous or next image of the current directory.
    ///
    /// Returns the path of the newly displayed image.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::NoImageLoaded`] before anything was displayed
    /// - [`NavigationError::AtFirst`] / [`NavigationError::AtLast`] at a boundary
    /// - [`NavigationError::NotListed`] if the current file left its directory
    /// - scan or decode errors of the target
    pub fn navigate(&mut self, direction: Direction) -> Result<PathBuf> {
        let current = self
            .current_path()
            .ok_or(NavigationError::NoImageLoaded)?;
        let target = directory_scanner::neighbor_of(current, direction)?;
        log::debug!("navigating {direction:?} to {}", target.display());

        self.display(&target)?;
        Ok(target)
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    #[must_use]
    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|loaded| loaded.path.as_path())
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.current.as_ref().map(|loaded| &loaded.image)
    }

    /// Status line of the displayed image, `None` while the canvas is empty.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.current.as_ref().map(|loaded| loaded.status.as_str())
    }

    /// Checks the Save As precondition before a dialog is shown.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::NothingToSave`] when no image is displayed.
    pub fn ensure_savable(&self) -> std::result::Result<&ImageData, SaveError> {
        self.image().ok_or(SaveError::NothingToSave)
    }

    /// Writes the displayed image to `target`, picking the codec from its
    /// extension.
    ///
    /// # Errors
    ///
    /// See [`media::save_image`]; also [`SaveError::NothingToSave`].
    pub fn save_as(&self, target: &Path) -> std::result::Result<SaveFormat, SaveError> {
        let image = self.ensure_savable()?;
        media::save_image(image, target)
    }
}
