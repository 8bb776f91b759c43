// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the UI state logic separated from the main App struct.

pub mod zoom;

pub use zoom::{ZoomFactor, ZoomState};
