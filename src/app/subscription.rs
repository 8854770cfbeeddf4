// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native window events to the upload widget
//! and drives the two timers: redraw frames while generating, and a periodic
//! tick for the cart acknowledgment and toast auto-dismiss.

use super::{Message, Screen};
use crate::config::TICK_INTERVAL;
use crate::ui::uploader;
use iced::{event, time, window, Subscription};

/// Creates the window event subscription for the current screen.
///
/// File hover and drop events are only handled on the Upload screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Upload => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window_event) => route_window_event(Screen::Upload, window_event),
            _ => None,
        }),
        Screen::Mockup => Subscription::none(),
    }
}

/// Maps a file drag-and-drop window event to a message for `screen`.
#[must_use]
pub fn route_window_event(screen: Screen, event: window::Event) -> Option<Message> {
    if screen != Screen::Upload {
        return None;
    }
    let message = match event {
        window::Event::FileHovered(_) => uploader::Message::FileHovered,
        window::Event::FilesHoveredLeft => uploader::Message::FilesHoveredLeft,
        window::Event::FileDropped(path) => uploader::Message::FileDropped(path),
        _ => return None,
    };
    Some(Message::Uploader(message))
}

/// Emits a message per rendered frame while the generation animation runs.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for the cart pulse and notification
/// auto-dismiss.
pub fn create_tick_subscription(
    needs_tick: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if needs_tick || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
