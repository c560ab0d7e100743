// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The card never writes it back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[member]` - Identity printed on the card and the access token seed
//! - `[refresh]` - Fade and press pulse durations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `load_with_override()` with a directory
//! 3. `--config-dir` / `MEMBERSHIP_CARD_CONFIG_DIR`, see [`paths`]
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use membership_card::app::config;
//!
//! let (config, _warning) = config::load();
//! let timings = config.refresh.timings();
//! let profile = config.member.profile();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::access::{RefreshTimings, TokenSeed};
use crate::domain::member::{MemberProfile, ValidThrough};
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key emitted when an existing config file cannot be used.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Identity printed on the card.
///
/// Every field is optional; missing or invalid values fall back to the demo
/// member.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MemberConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub logo_mark: Option<String>,
    /// `YYYY-MM`.
    #[serde(default)]
    pub valid_through: Option<String>,
    #[serde(default)]
    pub token_seed: Option<String>,
}

impl MemberConfig {
    /// Builds the card identity, replacing blank or invalid values by defaults.
    #[must_use]
    pub fn profile(&self) -> MemberProfile {
        let fallback = MemberProfile::default();

        let valid_through = match self.valid_through.as_deref() {
            None => fallback.valid_through,
            Some(raw) => parse_valid_through(raw).or_else(|| {
                tracing::warn!(value = raw, "ignoring invalid member.valid_through");
                fallback.valid_through
            }),
        };

        MemberProfile {
            name: non_blank(self.name.as_deref()).unwrap_or(fallback.name),
            tier: non_blank(self.tier.as_deref()).unwrap_or(fallback.tier),
            member_id: non_blank(self.member_id.as_deref()).unwrap_or(fallback.member_id),
            logo_mark: non_blank(self.logo_mark.as_deref())
                .and_then(|mark| mark.chars().next())
                .map_or(fallback.logo_mark, |c| c.to_uppercase().collect()),
            valid_through,
        }
    }

    /// Seed of the access token, defaulting when missing or blank.
    #[must_use]
    pub fn token_seed(&self) -> TokenSeed {
        match self.token_seed.as_deref() {
            None => TokenSeed::default(),
            Some(raw) => TokenSeed::new(raw).unwrap_or_else(|| {
                tracing::warn!("member.token_seed is blank, using default seed");
                TokenSeed::default()
            }),
        }
    }
}

/// Refresh cycle timing, in milliseconds.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RefreshConfig {
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: Option<u64>,
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: Option<u64>,
    #[serde(default = "default_press_ms")]
    pub press_ms: Option<u64>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_out_ms(),
            fade_in_ms: default_fade_in_ms(),
            press_ms: default_press_ms(),
        }
    }
}

impl RefreshConfig {
    /// Converts to domain timings, clamping each value to its supported range.
    #[must_use]
    pub fn timings(&self) -> RefreshTimings {
        let fade_out = self.fade_out_ms.unwrap_or(DEFAULT_FADE_OUT_MS).min(MAX_FADE_MS);
        let fade_in = self.fade_in_ms.unwrap_or(DEFAULT_FADE_IN_MS).min(MAX_FADE_MS);
        let press = self.press_ms.unwrap_or(DEFAULT_PRESS_MS).min(MAX_PRESS_MS);

        RefreshTimings {
            fade_out: Duration::from_millis(fade_out),
            fade_in: Duration::from_millis(fade_in),
            press_pulse: Duration::from_millis(press),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub member: MemberConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fade_out_ms() -> Option<u64> {
    Some(DEFAULT_FADE_OUT_MS)
}

fn default_fade_in_ms() -> Option<u64> {
    Some(DEFAULT_FADE_IN_MS)
}

fn default_press_ms() -> Option<u64> {
    Some(DEFAULT_PRESS_MS)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses a `YYYY-MM` month.
fn parse_valid_through(raw: &str) -> Option<ValidThrough> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").ok()?;
    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    ValidThrough::new(year, month)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn sectioned_config_loads() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            r#"
[general]
language = "fr"

[member]
name = "Sam Lee"
tier = "Gold"
member_id = "777"
logo_mark = "z"
valid_through = "2027-04"
token_seed = "guest-777"

[refresh]
fade_out_ms = 150
fade_in_ms = 300
press_ms = 80
"#,
        );

        let loaded = load_from_path(&path).expect("should load config");
        assert_eq!(loaded.general.language, Some("fr".to_string()));

        let profile = loaded.member.profile();
        assert_eq!(profile.name, "Sam Lee");
        assert_eq!(profile.tier_badge(), "GOLD");
        assert_eq!(profile.member_id, "777");
        assert_eq!(profile.logo_mark, "Z");
        assert_eq!(profile.valid_through, ValidThrough::new(2027, 4));
        assert_eq!(loaded.member.token_seed().as_str(), "guest-777");

        let timings = loaded.refresh.timings();
        assert_eq!(timings.fade_out, Duration::from_millis(150));
        assert_eq!(timings.fade_in, Duration::from_millis(300));
        assert_eq!(timings.press_pulse, Duration::from_millis(80));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "not = valid = toml");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.refresh.timings(), RefreshTimings::default());
        assert_eq!(config.member.profile(), MemberProfile::default());
        assert_eq!(config.member.token_seed(), TokenSeed::default());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\nlanguage = \"en-US\"\n");

        let loaded = load_from_path(&path).expect("should load config");
        assert_eq!(loaded.refresh, RefreshConfig::default());
        assert_eq!(loaded.member, MemberConfig::default());
    }

    #[test]
    fn refresh_values_are_clamped() {
        let refresh = RefreshConfig {
            fade_out_ms: Some(60_000),
            fade_in_ms: Some(0),
            press_ms: Some(5_000),
        };
        let timings = refresh.timings();
        assert_eq!(timings.fade_out, Duration::from_millis(MAX_FADE_MS));
        assert_eq!(timings.fade_in, Duration::ZERO);
        assert_eq!(timings.press_pulse, Duration::from_millis(MAX_PRESS_MS));
    }

    #[test]
    fn blank_member_fields_fall_back() {
        let member = MemberConfig {
            name: Some("   ".to_string()),
            token_seed: Some(" ".to_string()),
            valid_through: Some("december".to_string()),
            ..MemberConfig::default()
        };
        let profile = member.profile();
        assert_eq!(profile.name, "Alex Ray");
        assert_eq!(profile.valid_through, ValidThrough::new(2025, 12));
        assert_eq!(member.token_seed(), TokenSeed::default());
    }

    #[test]
    fn parse_valid_through_accepts_year_month_only() {
        assert_eq!(parse_valid_through("2026-01"), ValidThrough::new(2026, 1));
        assert_eq!(parse_valid_through(" 2026-11 "), ValidThrough::new(2026, 11));
        assert_eq!(parse_valid_through("2026-13"), None);
        assert_eq!(parse_valid_through("11/2026"), None);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[refresh]\nfade_out_ms = \"fast\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_reads_existing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[member]\nmember_id = \"42\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.member.profile().member_id, "42");
    }
}
