//! Event subscriptions.

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named};
use iced::{Subscription, window};

use super::App;
use crate::message::Message;

impl App {
    /// Keyboard shortcuts.
    ///
    /// Key presses captured by a widget (typing into the search box) are
    /// skipped, except Escape, which must still release focus from the search box.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(keyboard_shortcut)
    }
}

fn keyboard_shortcut(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    let escape = key == keyboard::Key::Named(Named::Escape);
    if status == event::Status::Captured && !escape {
        return None;
    }
    Some(Message::KeyPressed(key, modifiers))
}
