//! Keyboard shortcuts.
//!
//! | Key | Action |
//! |-----|--------|
//! | `/` | open and focus the search box |
//! | Ctrl/Cmd+B | toggle the sidebar |
//! | Escape | drop keyboard focus (the search box stays open) |
//! | `+` / `=` | zoom in |
//! | `-` | zoom out |
//! | `0` | reset the view |
//!
//! Keys typed into a focused text input never reach this handler, except
//! Escape (see `subscription`).

use dwg_core::NavAction;
use iced::Task;
use iced::keyboard::{self, key::Named};

use super::App;
use crate::message::{Message, SearchMessage, ViewerMessage};

impl App {
    /// Handle a key press from the event subscription.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match shortcut(&key, modifiers) {
            Some(message) => Task::done(message),
            None => Task::none(),
        }
    }
}

/// Message bound to a key press, if any.
pub(crate) fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Character("b") if modifiers.command() => {
            Some(Message::Navigation(NavAction::ToggleSidebar))
        }
        keyboard::Key::Named(Named::Escape) => Some(Message::Search(SearchMessage::Unfocus)),

        _ if modifiers.command() || modifiers.alt() => None,

        keyboard::Key::Character("/") => Some(Message::Search(SearchMessage::Open)),
        keyboard::Key::Character("+" | "=") => Some(Message::Viewer(ViewerMessage::ZoomIn)),
        keyboard::Key::Character("-") => Some(Message::Viewer(ViewerMessage::ZoomOut)),
        keyboard::Key::Character("0") => Some(Message::Viewer(ViewerMessage::ResetView)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn slash_opens_search() {
        let message = shortcut(&char_key("/"), keyboard::Modifiers::default());
        assert!(matches!(message, Some(Message::Search(SearchMessage::Open))));
    }

    #[test]
    fn command_b_toggles_sidebar() {
        let message = shortcut(&char_key("b"), keyboard::Modifiers::COMMAND);
        assert!(matches!(
            message,
            Some(Message::Navigation(NavAction::ToggleSidebar))
        ));
        assert!(shortcut(&char_key("b"), keyboard::Modifiers::default()).is_none());
    }

    #[test]
    fn escape_only_drops_focus() {
        let message = shortcut(
            &keyboard::Key::Named(Named::Escape),
            keyboard::Modifiers::default(),
        );
        assert!(matches!(message, Some(Message::Search(SearchMessage::Unfocus))));
    }

    #[test]
    fn zoom_keys() {
        let none = keyboard::Modifiers::default();
        assert!(matches!(
            shortcut(&char_key("="), none),
            Some(Message::Viewer(ViewerMessage::ZoomIn))
        ));
        assert!(matches!(
            shortcut(&char_key("-"), none),
            Some(Message::Viewer(ViewerMessage::ZoomOut))
        ));
        assert!(matches!(
            shortcut(&char_key("0"), none),
            Some(Message::Viewer(ViewerMessage::ResetView))
        ));
        assert!(shortcut(&char_key("0"), keyboard::Modifiers::COMMAND).is_none());
    }
}
