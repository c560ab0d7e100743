// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! The card only reads a config directory; it never writes state to disk.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`MEMBERSHIP_CARD_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir.clone());
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "MembershipCard";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MEMBERSHIP_CARD_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/MembershipCard/`
/// - macOS: `~/Library/Application Support/MembershipCard/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\MembershipCard\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// `override_path` takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(
        override_path,
        get_cli_config_dir(),
        std::env::var(ENV_CONFIG_DIR).ok(),
    )
}

/// Picks the first configured source; an empty env value counts as unset.
fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli_dir: Option<PathBuf>,
    env_dir: Option<String>,
) -> Option<PathBuf> {
    override_path
        .or(cli_dir)
        .or_else(|| env_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(platform_config_dir)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
