// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Arrow keys navigate between panels when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key),
            _ => None,
        }
    })
}

fn key_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight | Named::ArrowDown | Named::PageDown) => Some(Message::Next),
        Key::Named(Named::ArrowLeft | Named::ArrowUp | Named::PageUp) => Some(Message::Previous),
        Key::Named(Named::Home) => Some(Message::Select(0)),
        _ => None,
    }
}

/// Frame ticks, only while a transition is in flight.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
