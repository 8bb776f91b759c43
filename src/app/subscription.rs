// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only key presses that no widget captured are turned into shortcuts.

use super::Message;
use crate::ui::shortcuts;
use iced::{event, keyboard, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcuts::action_for_key(&key, modifiers).map(Message::Action)
            }
            _ => None,
        }
    })
}
