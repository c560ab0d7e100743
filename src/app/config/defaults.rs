// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Refresh**: Fade and press pulse durations of the refresh cycle
//! - **Animation**: Frame pacing while an animation runs
//!
//! Refresh durations are the domain defaults expressed in milliseconds, so
//! the config layer and `RefreshTimings::default()` cannot disagree.

use crate::domain::access::refresh;

// ==========================================================================
// Refresh Defaults
// ==========================================================================

/// Default fade-out duration of the access code (in milliseconds).
pub const DEFAULT_FADE_OUT_MS: u64 = refresh::DEFAULT_FADE_OUT.as_millis() as u64;

/// Default fade-in duration of the access code (in milliseconds).
pub const DEFAULT_FADE_IN_MS: u64 = refresh::DEFAULT_FADE_IN.as_millis() as u64;

/// Maximum fade duration, either direction (in milliseconds).
pub const MAX_FADE_MS: u64 = 2000;

/// Default press pulse duration of the refresh button (in milliseconds).
pub const DEFAULT_PRESS_MS: u64 = refresh::DEFAULT_PRESS_PULSE.as_millis() as u64;

/// Maximum press pulse duration (in milliseconds).
pub const MAX_PRESS_MS: u64 = 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FADE_OUT_MS <= MAX_FADE_MS);
    assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_MS);
    assert!(DEFAULT_PRESS_MS <= MAX_PRESS_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(ANIMATION_TICK_MS < DEFAULT_FADE_OUT_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_defaults_match_press_and_fade_timing() {
        assert_eq!(DEFAULT_FADE_OUT_MS, 200);
        assert_eq!(DEFAULT_FADE_IN_MS, 200);
        assert_eq!(DEFAULT_PRESS_MS, 200);
    }

    #[test]
    fn millisecond_defaults_track_domain_timings() {
        let timings = refresh::RefreshTimings::default();
        assert_eq!(u128::from(DEFAULT_FADE_OUT_MS), timings.fade_out.as_millis());
        assert_eq!(u128::from(DEFAULT_FADE_IN_MS), timings.fade_in.as_millis());
        assert_eq!(u128::from(DEFAULT_PRESS_MS), timings.press_pulse.as_millis());
    }
}
