//! Centralized path definitions for skillpulse
//!
//! ## Layout
//!
//! ```text
//! ~/.config/skillpulse/
//! └── config.toml        # Server, matching and leaderboard settings
//! ```
//!
//! Behavior data lives wherever `storage.data_file` points; there is no
//! implicit default so that a bare `serve` never writes to disk.

use std::path::PathBuf;

/// Application directory name under the user config dir
const APP_DIR: &str = "skillpulse";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user-level config directory.
///
/// Returns `~/.config/skillpulse/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the user-level config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
