// SPDX-License-Identifier: MPL-2.0
//! Native dialogs: open, Save As and informational messages.
//!
//! All three are awaited through `Task::perform` and answer with a single
//! [`Message`], so the update loop sees one result per dialog.

use super::Message;
use crate::media::extensions::{IMAGE_EXTENSIONS, IMAGE_FILTER_NAME};
use iced::Task;

/// Shows the open dialog filtered to supported images.
pub fn pick_image(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(IMAGE_FILTER_NAME, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Shows the Save As dialog, prefilled with the current file name.
pub fn pick_save_target(title: String, file_name: Option<String>) -> Task<Message> {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(IMAGE_FILTER_NAME, IMAGE_EXTENSIONS);

    let dialog = if let Some(name) = file_name {
        dialog.set_file_name(name)
    } else {
        dialog
    };

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Shows an informational message box with a single OK button.
pub fn show_info(title: String, description: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::InfoDialogClosed,
    )
}
