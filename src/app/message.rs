// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::menu::{self, Action};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Toolbars and keyboard
/// shortcuts send [`Action`]s directly; the menu bar goes through its own
/// message type so it can track which dropdown is open.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(menu::Message),
    Action(Action),
    /// Result from the open file dialog (`None` on cancel).
    OpenDialogResult(Option<PathBuf>),
    /// Result from the Save As dialog (`None` on cancel).
    SaveDialogResult(Option<PathBuf>),
    /// The informational dialog was dismissed.
    InfoDialogClosed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to display on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
