// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Opacity and scale values come out of easing curves, so exact `assert_eq!`
//! on them is fragile. Use the `approx` macros re-exported here instead.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Looser epsilon for values sampled mid-animation.
pub const ANIMATION_EPSILON: f32 = 1e-4;

/// Serializes tests that touch process environment variables.
pub fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};

    static ENV_MUTEX: Mutex<()> = Mutex::new(());
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}
