// SPDX-License-Identifier: MPL-2.0
//! `membership_card` is a single-screen digital membership card built with
//! the Iced GUI framework.
//!
//! The card shows a member's identity next to a scannable access code. A
//! refresh button regenerates the code behind a fade-out, swap and fade-in
//! animation, guarded so that overlapping requests are dropped.

#![doc(html_root_url = "https://docs.rs/membership_card/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
