// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events reveal the window id the engine needs before it can be
//! initialized. Arrow keys turn pages. Timers drive animations and autoplay.

use super::{App, Message, Stage};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval of the spinner and page-turn animations.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![create_event_subscription()];

    if app.is_animating() {
        subscriptions.push(time::every(FRAME_INTERVAL).map(Message::Tick));
    }

    if app.autoplay && matches!(app.stage, Stage::Ready) {
        subscriptions.push(
            time::every(app.autoplay_interval.as_duration()).map(|_| Message::AutoplayTick),
        );
    }

    Subscription::batch(subscriptions)
}

fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(_) => Some(Message::WindowSeen(window_id)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            key_to_message(&key)
        }
        _ => None,
    })
}

/// Maps navigation keys to messages.
fn key_to_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(Message::Previous),
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(Message::Next),
        Key::Named(Named::Home) => Some(Message::GoTo(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        assert!(matches!(
            key_to_message(&Key::Named(Named::ArrowLeft)),
            Some(Message::Previous)
        ));
        assert!(matches!(
            key_to_message(&Key::Named(Named::ArrowRight)),
            Some(Message::Next)
        ));
        assert!(matches!(
            key_to_message(&Key::Named(Named::Home)),
            Some(Message::GoTo(1))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(key_to_message(&Key::Named(Named::Escape)).is_none());
        assert!(key_to_message(&Key::Character("a".into())).is_none());
    }
}
