// SPDX-License-Identifier: MPL-2.0
//! Access token value objects and the token generator.
//!
//! A token is the configured seed, optionally followed by the wall-clock
//! second at which it was issued: `"<seed>"` or `"<seed>-<secs>"`. The suffix
//! is never cumulative, every refresh starts again from the seed.

use std::fmt;

/// Seed used when no seed is configured.
pub const DEFAULT_TOKEN_SEED: &str = "user-id-12345-abcde";

// =============================================================================
// UnixSeconds
// =============================================================================

/// Whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnixSeconds(u64);

impl UnixSeconds {
    /// Wraps a raw second count.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Converts a signed timestamp, saturating pre-epoch values to zero.
    #[must_use]
    pub fn from_signed(secs: i64) -> Self {
        Self(u64::try_from(secs).unwrap_or(0))
    }

    /// Returns the raw second count.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UnixSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TokenSeed
// =============================================================================

/// Base value of every access token. Never empty, never padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSeed(String);

impl TokenSeed {
    /// Creates a seed from user input.
    ///
    /// Returns `None` when the value is blank after trimming.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TokenSeed {
    fn default() -> Self {
        Self(DEFAULT_TOKEN_SEED.to_string())
    }
}

// =============================================================================
// AccessToken
// =============================================================================

/// Opaque string encoded into the scannable code.
///
/// Tokens are immutable: a refresh produces a new value through [`generate`]
/// and the holder swaps it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken {
    seed: TokenSeed,
    issued_at: Option<UnixSeconds>,
    value: String,
}

impl AccessToken {
    /// The token shown when the screen opens: the bare seed.
    #[must_use]
    pub fn initial(seed: TokenSeed) -> Self {
        let value = seed.as_str().to_string();
        Self {
            seed,
            issued_at: None,
            value,
        }
    }

    fn issued(seed: TokenSeed, at: UnixSeconds) -> Self {
        let value = format!("{}-{}", seed.as_str(), at);
        Self {
            seed,
            issued_at: Some(at),
            value,
        }
    }

    /// Returns the full token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the seed this token was derived from.
    #[must_use]
    pub fn seed(&self) -> &TokenSeed {
        &self.seed
    }

    /// Returns the issue second, or `None` for the initial token.
    #[must_use]
    pub fn issued_at(&self) -> Option<UnixSeconds> {
        self.issued_at
    }
}

impl Default for AccessToken {
    fn default() -> Self {
        Self::initial(TokenSeed::default())
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Produces the token that replaces `previous` at wall-clock second `now`.
///
/// Only the seed of `previous` is used, so the result depends on `now` alone.
/// Two calls within the same second yield equal tokens.
#[must_use]
pub fn generate(previous: &AccessToken, now: UnixSeconds) -> AccessToken {
    AccessToken::issued(previous.seed.clone(), now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_token_is_the_seed() {
        let token = AccessToken::default();
        assert_eq!(token.as_str(), "user-id-12345-abcde");
        assert!(token.issued_at().is_none());
    }

    #[test]
    fn generate_appends_timestamp_to_seed() {
        let token = generate(&AccessToken::default(), UnixSeconds::new(1_700_000_000));
        assert_eq!(token.as_str(), "user-id-12345-abcde-1700000000");
        assert_eq!(token.issued_at(), Some(UnixSeconds::new(1_700_000_000)));
    }

    #[test]
    fn generate_does_not_stack_suffixes() {
        let first = generate(&AccessToken::default(), UnixSeconds::new(10));
        let second = generate(&first, UnixSeconds::new(11));
        assert_eq!(second.as_str(), "user-id-12345-abcde-11");
    }

    #[test]
    fn different_seconds_give_different_tokens() {
        let token = AccessToken::default();
        for (a, b) in [(0, 1), (1_700_000_000, 1_700_000_001), (5, 500)] {
            assert_ne!(
                generate(&token, UnixSeconds::new(a)),
                generate(&token, UnixSeconds::new(b))
            );
        }
    }

    #[test]
    fn same_second_gives_identical_tokens() {
        let token = AccessToken::default();
        let now = UnixSeconds::new(42);
        assert_eq!(generate(&token, now), generate(&token, now));
    }

    #[test]
    fn seed_rejects_blank_values() {
        assert!(TokenSeed::new("").is_none());
        assert!(TokenSeed::new("   \t").is_none());
    }

    #[test]
    fn seed_is_trimmed() {
        let seed = TokenSeed::new("  guest-001 ").expect("seed should be valid");
        assert_eq!(seed.as_str(), "guest-001");
        assert_eq!(AccessToken::initial(seed).as_str(), "guest-001");
    }

    #[test]
    fn unix_seconds_saturates_negative_input() {
        assert_eq!(UnixSeconds::from_signed(-5), UnixSeconds::new(0));
        assert_eq!(UnixSeconds::from_signed(99).value(), 99);
    }
}
