// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are always listened to; the animation tick only runs
//! while the refresh coordinator has something to animate.

use super::config::defaults::ANIMATION_TICK_MS;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes R and Enter to a refresh request.
///
/// Key presses already captured by a focused widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                refresh_shortcut(&key).then_some(Message::RefreshRequested)
            }
            _ => None,
        }
    })
}

fn refresh_shortcut(key: &Key) -> bool {
    match key {
        Key::Named(Named::Enter) => true,
        Key::Character(c) => c.as_str().eq_ignore_ascii_case("r"),
        _ => false,
    }
}

/// Creates the animation tick subscription, active only while `animating`.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
