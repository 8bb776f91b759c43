// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Displayed image, zoom and scrollable canvas
//! - [`menu`] - File/View menu bar and the shared [`menu::Action`] set
//! - [`toolbar`] - File/View toolbars mirroring the menus
//! - [`status_bar`] - Image information label and zoom indicator
//! - [`shortcuts`] - Keyboard shortcut mapping
//! - [`state`] - Reusable state (zoom)
//! - [`design_tokens`] - Spacing, sizing and typography constants
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod menu;
pub mod shortcuts;
pub mod state;
pub mod status_bar;
pub mod theming;
pub mod toolbar;
pub mod viewer;
