// SPDX-License-Identifier: MPL-2.0
//! Wall clock used to stamp refreshed access tokens.

use crate::domain::access::UnixSeconds;
use chrono::Utc;

/// Current wall-clock time in whole seconds since the Unix epoch.
///
/// A clock set before 1970 reads as zero.
#[must_use]
pub fn unix_now() -> UnixSeconds {
    UnixSeconds::from_signed(Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_now_is_after_2023() {
        assert!(unix_now().value() > 1_700_000_000);
    }

    #[test]
    fn unix_now_does_not_go_backwards() {
        let first = unix_now();
        let second = unix_now();
        assert!(second >= first);
    }
}
