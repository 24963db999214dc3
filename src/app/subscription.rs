// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native window and keyboard events to top-level
//! messages based on the current screen.

use super::{Message, Screen};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the tick driving toast auto-dismiss.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the appropriate event subscription based on the current screen.
///
/// File drag and drop is only handled on the Gallery screen. Escape is
/// routed everywhere; it closes whichever overlay is open.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
            event::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::FilesHoverLeft)
            }
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }),
        Screen::ConfigurationError => event::listen_with(|event, _status, _window_id| {
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            }
        }),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
