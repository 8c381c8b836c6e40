// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::pagination;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval between spinner animation frames.
const SPINNER_TICK: Duration = Duration::from_millis(33);

/// Keyboard shortcuts: Left/Right arrows mirror the Previous/Next buttons.
///
/// Only key presses the focused widget ignored are routed, so arrow keys
/// still move the caret while the search input has focus. Bounds are
/// re-checked in the update path since these fire regardless of which
/// buttons are on screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match status {
        event::Status::Captured => None,
        event::Status::Ignored => {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) = event
            {
                match named {
                    keyboard::key::Named::ArrowLeft => {
                        Some(Message::Pagination(pagination::Message::Previous))
                    }
                    keyboard::key::Named::ArrowRight => {
                        Some(Message::Pagination(pagination::Message::Next))
                    }
                    _ => None,
                }
            } else {
                None
            }
        }
    })
}

/// Animation ticks are only needed while a fetch is in flight.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
