// SPDX-License-Identifier: MPL-2.0
//! Refresh coordinator state machine.
//!
//! A refresh request walks the access code through
//! `Idle → FadingOut → Swapping → FadingIn → Idle`. The machine is driven by
//! [`RefreshCoordinator::tick`], which the host calls on every animation frame
//! while [`RefreshCoordinator::is_animating`] is true. The token is replaced
//! only while the code is fully transparent.
//!
//! Requests made while a cycle is in flight are dropped.

use super::token::{generate, AccessToken, UnixSeconds};
use crate::domain::animation::{scale_bounds, Opacity, Scale, Tween};
use std::time::{Duration, Instant};

/// Default fade-out duration of the access code.
pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(200);
/// Default fade-in duration of the access code.
pub const DEFAULT_FADE_IN: Duration = Duration::from_millis(200);
/// Default length of the whole press pulse (down then up).
pub const DEFAULT_PRESS_PULSE: Duration = Duration::from_millis(200);

// =============================================================================
// State
// =============================================================================

/// Busy flag exposed to the refresh control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
}

impl RefreshState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_refreshing(self) -> bool {
        matches!(self, Self::Refreshing)
    }
}

/// Fine-grained phase of a refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RefreshPhase {
    #[default]
    Idle,
    /// Opacity is heading to zero.
    FadingOut { fade: Tween },
    /// Opacity is zero and the token is being replaced. Never observable
    /// between two driver calls.
    Swapping,
    /// Opacity is heading back to one with the new token in place.
    FadingIn { fade: Tween },
}

impl RefreshPhase {
    #[must_use]
    pub fn state(&self) -> RefreshState {
        match self {
            Self::Idle => RefreshState::Idle,
            Self::FadingOut { .. } | Self::Swapping | Self::FadingIn { .. } => {
                RefreshState::Refreshing
            }
        }
    }
}

/// Durations of the refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTimings {
    pub fade_out: Duration,
    pub fade_in: Duration,
    /// Whole press pulse; the first half scales down, the second half back up.
    pub press_pulse: Duration,
}

impl Default for RefreshTimings {
    fn default() -> Self {
        Self {
            fade_out: DEFAULT_FADE_OUT,
            fade_in: DEFAULT_FADE_IN,
            press_pulse: DEFAULT_PRESS_PULSE,
        }
    }
}

/// Observable outcome of a driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshEvent {
    /// The token was replaced. `opacity` is the code opacity at that instant.
    TokenSwapped {
        previous: AccessToken,
        current: AccessToken,
        opacity: Opacity,
    },
    /// The fade-in finished and the coordinator is idle again.
    Completed,
}

/// Scale-down then scale-up pulse of the refresh control.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PressPulse {
    down: Tween,
    up: Tween,
}

impl PressPulse {
    fn start(now: Instant, duration: Duration) -> Self {
        let half = duration / 2;
        let down = Tween::new(1.0, scale_bounds::PRESSED, now, half);
        let up = Tween::new(scale_bounds::PRESSED, 1.0, down.ends_at(), duration - half);
        Self { down, up }
    }

    fn scale_at(&self, now: Instant) -> Scale {
        if self.down.is_finished(now) {
            Scale::new(self.up.value_at(now))
        } else {
            Scale::new(self.down.value_at(now))
        }
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.up.is_finished(now)
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Owns the current access token and sequences its replacement.
#[derive(Debug, Clone)]
pub struct RefreshCoordinator {
    token: AccessToken,
    phase: RefreshPhase,
    timings: RefreshTimings,
    press: Option<PressPulse>,
    opacity: Opacity,
    button_scale: Scale,
}

impl RefreshCoordinator {
    #[must_use]
    pub fn new(token: AccessToken, timings: RefreshTimings) -> Self {
        Self {
            token,
            phase: RefreshPhase::Idle,
            timings,
            press: None,
            opacity: Opacity::OPAQUE,
            button_scale: Scale::IDENTITY,
        }
    }

    /// Starts a refresh cycle at `now`, unless one is already running.
    pub fn request_refresh(&mut self, now: Instant) {
        if self.state().is_refreshing() {
            return;
        }

        self.press = Some(PressPulse::start(now, self.timings.press_pulse));
        self.phase = RefreshPhase::FadingOut {
            fade: Tween::new(
                self.opacity.value(),
                Opacity::TRANSPARENT.value(),
                now,
                self.timings.fade_out,
            ),
        };
    }

    /// Advances the cycle to `now` and samples opacity and press scale.
    ///
    /// `wall` is the wall-clock second used if the token gets swapped during
    /// this call. Several phases may complete in one call when frames are late.
    pub fn tick(&mut self, now: Instant, wall: UnixSeconds) -> Vec<RefreshEvent> {
        let mut events = Vec::new();

        loop {
            match self.phase {
                RefreshPhase::Idle => {
                    self.opacity = Opacity::OPAQUE;
                    break;
                }
                RefreshPhase::FadingOut { fade } => {
                    if !fade.is_finished(now) {
                        self.opacity = Opacity::new(fade.value_at(now));
                        break;
                    }
                    self.opacity = Opacity::TRANSPARENT;
                    self.phase = RefreshPhase::Swapping;
                }
                RefreshPhase::Swapping => {
                    let current = generate(&self.token, wall);
                    let previous = std::mem::replace(&mut self.token, current.clone());
                    events.push(RefreshEvent::TokenSwapped {
                        previous,
                        current,
                        opacity: self.opacity,
                    });
                    self.phase = RefreshPhase::FadingIn {
                        fade: Tween::new(
                            Opacity::TRANSPARENT.value(),
                            Opacity::OPAQUE.value(),
                            now,
                            self.timings.fade_in,
                        ),
                    };
                }
                RefreshPhase::FadingIn { fade } => {
                    if !fade.is_finished(now) {
                        self.opacity = Opacity::new(fade.value_at(now));
                        break;
                    }
                    self.opacity = Opacity::OPAQUE;
                    self.phase = RefreshPhase::Idle;
                    events.push(RefreshEvent::Completed);
                }
            }
        }

        if let Some(press) = self.press {
            self.button_scale = press.scale_at(now);
            if press.is_finished(now) {
                self.press = None;
                self.button_scale = Scale::IDENTITY;
            }
        }

        events
    }

    /// Currently displayed token.
    #[must_use]
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    #[must_use]
    pub fn state(&self) -> RefreshState {
        self.phase.state()
    }

    #[must_use]
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state().is_refreshing()
    }

    /// True while the host should keep delivering ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_refreshing() || self.press.is_some()
    }

    /// Opacity of the access code as of the last tick.
    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Scale of the refresh control as of the last tick.
    #[must_use]
    pub fn button_scale(&self) -> Scale {
        self.button_scale
    }

}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new(AccessToken::default(), RefreshTimings::default())
    }
}
