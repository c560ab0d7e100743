// SPDX-License-Identifier: MPL-2.0
//! Member identity shown on the card.

use std::fmt;

/// Month through which the membership is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidThrough {
    year: u16,
    month: u8,
}

impl ValidThrough {
    /// Returns `None` unless `month` is within `1..=12`.
    #[must_use]
    pub fn new(year: u16, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }
}

/// Formats as `MM/YYYY`.
impl fmt::Display for ValidThrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Identity block of the membership card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub name: String,
    pub tier: String,
    pub member_id: String,
    /// Single glyph shown in the round logo.
    pub logo_mark: String,
    pub valid_through: Option<ValidThrough>,
}

impl MemberProfile {
    /// Avatar initials: first letters of the first and last words of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Tier label for the badge, uppercased.
    #[must_use]
    pub fn tier_badge(&self) -> String {
        self.tier.to_uppercase()
    }
}

impl Default for MemberProfile {
    fn default() -> Self {
        Self {
            name: "Alex Ray".to_string(),
            tier: "Platinum".to_string(),
            member_id: "12345".to_string(),
            logo_mark: "M".to_string(),
            valid_through: ValidThrough::new(2025, 12),
        }
    }
}

fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());

    match (first, last) {
        (Some(a), Some(b)) => [upper(a), upper(b)].iter().collect(),
        (Some(a), None) => upper(a).to_string(),
        _ => "?".to_string(),
    }
}

/// First char of the uppercase mapping; `ß` stays one initial.
fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
