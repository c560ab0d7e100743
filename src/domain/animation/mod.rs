// SPDX-License-Identifier: MPL-2.0
//! Animation domain types.
//!
//! Framework-independent values and interpolation used to animate the access
//! code (opacity) and the refresh control (press scale).

pub mod newtypes;
pub mod tween;

pub use newtypes::{scale_bounds, Opacity, Scale};
pub use tween::{ease_in_out_quad, Tween};
