// SPDX-License-Identifier: MPL-2.0
//! Access token domain: the token value, its generator and the refresh cycle.

pub mod refresh;
pub mod token;

pub use refresh::{
    RefreshCoordinator, RefreshEvent, RefreshPhase, RefreshState, RefreshTimings,
};
pub use token::{generate, AccessToken, TokenSeed, UnixSeconds, DEFAULT_TOKEN_SEED};
