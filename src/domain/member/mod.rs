// SPDX-License-Identifier: MPL-2.0
//! Member identity domain types.

pub mod profile;

pub use profile::{MemberProfile, ValidThrough};
