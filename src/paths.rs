//! Centralized path definitions for todos
//!
//! ## Layout
//!
//! ```text
//! ~/.todos/
//! └── config.toml               # Server settings
//! ```
//!
//! `TODOS_CONFIG` points at a config file elsewhere.

use std::path::PathBuf;

/// Directory name for user-level state
pub const GLOBAL_DIR: &str = ".todos";

/// Config filename inside [`GLOBAL_DIR`]
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TODOS_CONFIG";

/// Get the user-level config directory.
///
/// Returns `~/.todos`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the default config file path.
///
/// Returns `~/.todos/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `TODOS_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
