// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every user command arrives as an [`Action`]; menu, toolbar and keyboard
//! only differ in how they produce it. Failures never change the viewer
//! state and are reported through an informational dialog.

use super::{dialogs, Message, Modal};
use crate::directory_scanner::Direction;
use crate::error::{Error, SaveError};
use crate::i18n::fluent::I18n;
use crate::ui::menu::{self, Action, Event as MenuEvent, MenuKind};
use crate::ui::viewer::ViewerState;
use iced::Task;
use std::path::Path;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a mut ViewerState,
    pub open_menu: &'a mut Option<MenuKind>,
    pub modal: &'a mut Option<Modal>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Menu(menu_message) => match menu::update(menu_message, ctx.open_menu) {
            MenuEvent::None => Task::none(),
            MenuEvent::Action(action) => handle_action(ctx, action),
        },
        Message::Action(action) => {
            *ctx.open_menu = None;
            handle_action(ctx, action)
        }
        Message::OpenDialogResult(path) => {
            *ctx.modal = None;
            match path {
                Some(path) => display_path(ctx, &path),
                None => Task::none(),
            }
        }
        Message::SaveDialogResult(path) => {
            *ctx.modal = None;
            match path {
                Some(path) => save_to(ctx, &path),
                None => Task::none(),
            }
        }
        Message::InfoDialogClosed => {
            *ctx.modal = None;
            Task::none()
        }
    }
}

fn handle_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    if let Some(modal) = ctx.modal.as_ref() {
        log::debug!("ignoring {action:?} while {modal:?} is open");
        return Task::none();
    }

    match action {
        Action::Open => {
            *ctx.modal = Some(Modal::OpenDialog);
            dialogs::pick_image(ctx.i18n.tr("dialog-open-title"))
        }
        Action::SaveAs => handle_save_as(ctx),
        Action::Exit => {
            log::info!("exit requested");
            iced::exit()
        }
        Action::ZoomIn => {
            ctx.viewer.zoom_in();
            Task::none()
        }
        Action::ZoomOut => {
            ctx.viewer.zoom_out();
            Task::none()
        }
        Action::Previous => navigate(ctx, Direction::Previous),
        Action::Next => navigate(ctx, Direction::Next),
    }
}

/// Displays `path`, reporting a failed decode without touching the viewer.
pub fn display_path(ctx: &mut UpdateContext<'_>, path: &Path) -> Task<Message> {
    match ctx.viewer.display(path).map(|_| ()) {
        Ok(()) => Task::none(),
        Err(err) => {
            log::warn!("failed to open {}: {err}", path.display());
            let text = open_failed_message(ctx.i18n, &err);
            notify(ctx, text)
        }
    }
}

fn navigate(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    match ctx.viewer.navigate(direction) {
        Ok(_) => Task::none(),
        Err(Error::Navigation(err)) => {
            log::debug!("navigation {direction:?} refused: {err}");
            let text = ctx.i18n.tr(err.i18n_key());
            notify(ctx, text)
        }
        Err(err) => {
            log::warn!("navigation {direction:?} failed: {err}");
            let text = open_failed_message(ctx.i18n, &err);
            notify(ctx, text)
        }
    }
}

fn handle_save_as(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(err) = ctx.viewer.ensure_savable().err() {
        let text = save_error_message(ctx.i18n, &err);
        return notify(ctx, text);
    }

    let file_name = ctx.viewer.current().map(|loaded| loaded.file_name());
    *ctx.modal = Some(Modal::SaveDialog);
    dialogs::pick_save_target(ctx.i18n.tr("dialog-save-title"), file_name)
}

fn save_to(ctx: &mut UpdateContext<'_>, target: &Path) -> Task<Message> {
    match ctx.viewer.save_as(target) {
        Ok(_) => Task::none(),
        Err(err) => {
            log::warn!("save to {} failed: {err}", target.display());
            let text = save_error_message(ctx.i18n, &err);
            notify(ctx, text)
        }
    }
}

/// Records the pending dialog and shows it.
fn notify(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    *ctx.modal = Some(Modal::Info(text.clone()));
    dialogs::show_info(ctx.i18n.tr("dialog-title"), text)
}

/// `Failed to open image: <reason>`.
pub fn open_failed_message(i18n: &I18n, err: &Error) -> String {
    let reason = match err {
        Error::Io(reason) | Error::Decode(reason) | Error::Config(reason) => reason.clone(),
        other => other.to_string(),
    };
    i18n.tr_with_args("open-failed", &[("reason", &reason)])
}

pub fn save_error_message(i18n: &I18n, err: &SaveError) -> String {
    match err {
        SaveError::Encode(reason) => i18n.tr_with_args(err.i18n_key(), &[("reason", reason)]),
        SaveError::NothingToSave | SaveError::BadFormatOrFilename => i18n.tr(err.i18n_key()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn save_errors_match_dialog_texts() {
        let i18n = english();
        assert_eq!(
            save_error_message(&i18n, &SaveError::NothingToSave),
            "Nothing to save"
        );
        assert_eq!(
            save_error_message(&i18n, &SaveError::BadFormatOrFilename),
            "Save error: bad format or filename"
        );
        assert_eq!(
            save_error_message(&i18n, &SaveError::Encode("disk full".into())),
            "Save error: disk full"
        );
    }

    #[test]
    fn open_failure_carries_reason() {
        let i18n = english();
        let message = open_failed_message(&i18n, &Error::Decode("bad signature".into()));
        assert_eq!(message, "Failed to open image: bad signature");
    }
}
