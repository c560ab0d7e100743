// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{clock, Message};
use crate::domain::access::{RefreshCoordinator, RefreshEvent};
use crate::ui::access_code::AccessCode;
use iced::Task;
use std::time::Instant;

/// Mutable slice of `App` that message handlers work on.
pub struct UpdateContext<'a> {
    pub coordinator: &'a mut RefreshCoordinator,
    pub access_code: &'a mut AccessCode,
}

/// Routes a message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::RefreshRequested => handle_refresh_requested(ctx, Instant::now()),
        Message::Tick(now) => handle_tick(ctx, now),
    }
}

fn handle_refresh_requested(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.coordinator.is_refreshing() {
        tracing::debug!(phase = ?ctx.coordinator.phase(), "refresh ignored, cycle in flight");
        return Task::none();
    }

    tracing::info!(token = %ctx.coordinator.token(), "refresh accepted");
    ctx.coordinator.request_refresh(now);
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    for event in ctx.coordinator.tick(now, clock::unix_now()) {
        match event {
            RefreshEvent::TokenSwapped {
                previous,
                current,
                opacity,
            } => {
                *ctx.access_code = AccessCode::encode(&current);
                tracing::info!(
                    previous = %previous,
                    current = %current,
                    opacity = opacity.value(),
                    "access token swapped"
                );
            }
            RefreshEvent::Completed => {
                tracing::info!(token = %ctx.coordinator.token(), "refresh completed");
            }
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{AccessToken, RefreshTimings};
    use std::time::Duration;

    fn fixture() -> (RefreshCoordinator, AccessCode) {
        let coordinator = RefreshCoordinator::new(AccessToken::default(), RefreshTimings::default());
        let access_code = AccessCode::encode(coordinator.token());
        (coordinator, access_code)
    }

    #[test]
    fn swap_tick_reencodes_the_access_code() {
        let (mut coordinator, mut access_code) = fixture();
        let mut ctx = UpdateContext {
            coordinator: &mut coordinator,
            access_code: &mut access_code,
        };
        let start = Instant::now();

        let _ = handle_refresh_requested(&mut ctx, start);
        let _ = handle_tick(&mut ctx, start + Duration::from_millis(250));

        assert_ne!(ctx.access_code.value(), "user-id-12345-abcde");
        assert_eq!(ctx.access_code.value(), ctx.coordinator.token().as_str());
        assert!(ctx.coordinator.is_refreshing());
    }

    #[test]
    fn mid_fade_tick_keeps_the_old_code() {
        let (mut coordinator, mut access_code) = fixture();
        let mut ctx = UpdateContext {
            coordinator: &mut coordinator,
            access_code: &mut access_code,
        };
        let start = Instant::now();

        let _ = handle_refresh_requested(&mut ctx, start);
        let _ = handle_tick(&mut ctx, start + Duration::from_millis(100));

        assert_eq!(ctx.access_code.value(), "user-id-12345-abcde");
    }

    #[test]
    fn request_while_refreshing_keeps_phase() {
        let (mut coordinator, mut access_code) = fixture();
        let mut ctx = UpdateContext {
            coordinator: &mut coordinator,
            access_code: &mut access_code,
        };
        let start = Instant::now();

        let _ = handle_refresh_requested(&mut ctx, start);
        let phase = ctx.coordinator.phase();
        let _ = handle_refresh_requested(&mut ctx, start + Duration::from_millis(50));

        assert_eq!(ctx.coordinator.phase(), phase);
    }
}
