// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and the refresh
//! state machine. It depends on `std` only, so every rule here is testable
//! without a window or a runtime.
//!
//! # Modules
//!
//! - [`access`]: Access token and refresh cycle ([`AccessToken`](access::AccessToken),
//!   [`RefreshCoordinator`](access::RefreshCoordinator))
//! - [`animation`]: Animated values ([`Opacity`](animation::Opacity),
//!   [`Scale`](animation::Scale), [`Tween`](animation::Tween))
//! - [`member`]: Card identity ([`MemberProfile`](member::MemberProfile))

pub mod access;
pub mod animation;
pub mod member;
