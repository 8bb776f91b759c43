// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting images.
//!
//! This module lists a single directory for supported image formats, sorts
//! them by file name and answers previous/next queries relative to the
//! current image. Listings are never cached: every navigation rescans.

use crate::error::{NavigationError, Result};
use crate::media;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Direction of a previous/next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Represents the sorted list of images in one directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Scans the directory containing `current_file`.
    ///
    /// A bare file name (no directory part) is resolved against the
    /// working directory.
    pub fn scan_for(current_file: &Path) -> Result<Self> {
        let parent = match current_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::scan(parent)
    }

    /// Scans a directory for supported images and sorts them by file name.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        log::debug!(
            "scanned {}: {} image(s)",
            directory.display(),
            image_files.len()
        );

        Ok(Self { image_files })
    }

    fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(PathBuf::as_path)
    }

    /// Iterates over the sorted file names.
    pub fn file_names(&self) -> impl Iterator<Item = &OsStr> {
        self.image_files.iter().filter_map(|p| p.file_name())
    }

    /// Finds the index of the entry whose file name equals `file_name`.
    pub fn position_of(&self, file_name: &OsStr) -> Option<usize> {
        self.image_files
            .iter()
            .position(|p| p.file_name() == Some(file_name))
    }

    /// Returns the entry before or after `current` in name order.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::NotListed`] if `current` is not in the list
    /// - [`NavigationError::AtFirst`] / [`NavigationError::AtLast`] at a boundary
    pub fn neighbor(
        &self,
        current: &Path,
        direction: Direction,
    ) -> std::result::Result<&Path, NavigationError> {
        let index = current
            .file_name()
            .and_then(|name| self.position_of(name))
            .ok_or(NavigationError::NotListed)?;

        let target = neighbor_index(self.len(), index, direction)?;
        self.get(target).ok_or(NavigationError::NotListed)
    }
}

/// Index arithmetic for previous/next without wrap-around.
///
/// # Errors
///
/// Returns [`NavigationError::AtFirst`] when moving back from index 0 and
/// [`NavigationError::AtLast`] when moving forward from the last index.
pub fn neighbor_index(
    len: usize,
    index: usize,
    direction: Direction,
) -> std::result::Result<usize, NavigationError> {
    match direction {
        Direction::Previous if index == 0 => Err(NavigationError::AtFirst),
        Direction::Previous => Ok(index - 1),
        Direction::Next if index + 1 >= len => Err(NavigationError::AtLast),
        Direction::Next => Ok(index + 1),
    }
}

/// Navigation service: rescans the directory of `current` and returns the
/// path of the previous or next image.
///
/// The result keeps the directory part of `current` as given, so a bare
/// `a.png` leads to `b.png` rather than `./b.png`.
///
/// # Errors
///
/// Propagates scan I/O failures and the [`NavigationError`] boundaries.
pub fn neighbor_of(current: &Path, direction: Direction) -> Result<PathBuf> {
    let list = ImageList::scan_for(current)?;
    let name = list
        .neighbor(current, direction)?
        .file_name()
        .ok_or(NavigationError::NotListed)?;
    Ok(current.with_file_name(name))
}
