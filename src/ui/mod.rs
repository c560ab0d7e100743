// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: views are
//! stateless functions over borrowed application state.
//!
//! - [`card`] - The membership card screen
//! - [`access_code`] - QR rendering of the current access token
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod access_code;
pub mod card;
pub mod design_tokens;
pub mod styles;
