// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the viewer.
//!
//! | Key          | Action   |
//! |--------------|----------|
//! | `+` / `=`    | Zoom In  |
//! | `-` / `_`    | Zoom Out |
//! | Up / Left    | Previous |
//! | Down / Right | Next     |

use crate::ui::menu::Action;
use iced::keyboard::{key::Named, Key, Modifiers};

/// Maps a pressed key to its action.
///
/// Shift is allowed since `+` and `_` need it on most layouts; chords with
/// Ctrl, Alt or Logo are left to the platform.
pub fn action_for_key(key: &Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Action::ZoomIn),
            "-" | "_" => Some(Action::ZoomOut),
            _ => None,
        },
        Key::Named(Named::ArrowUp | Named::ArrowLeft) => Some(Action::Previous),
        Key::Named(Named::ArrowDown | Named::ArrowRight) => Some(Action::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn zoom_keys_map_to_zoom_actions() {
        for c in ["+", "="] {
            assert_eq!(action_for_key(&character(c), Modifiers::empty()), Some(Action::ZoomIn));
        }
        for c in ["-", "_"] {
            assert_eq!(action_for_key(&character(c), Modifiers::SHIFT), Some(Action::ZoomOut));
        }
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        let previous = [Named::ArrowUp, Named::ArrowLeft];
        let next = [Named::ArrowDown, Named::ArrowRight];

        for named in previous {
            assert_eq!(
                action_for_key(&Key::Named(named), Modifiers::empty()),
                Some(Action::Previous)
            );
        }
        for named in next {
            assert_eq!(
                action_for_key(&Key::Named(named), Modifiers::empty()),
                Some(Action::Next)
            );
        }
    }

    #[test]
    fn chords_and_other_keys_are_ignored() {
        assert_eq!(action_for_key(&character("+"), Modifiers::CTRL), None);
        assert_eq!(action_for_key(&Key::Named(Named::ArrowLeft), Modifiers::ALT), None);
        assert_eq!(action_for_key(&character("a"), Modifiers::empty()), None);
        assert_eq!(action_for_key(&Key::Named(Named::Escape), Modifiers::empty()), None);
    }
}
