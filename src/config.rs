//! Server configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields a working configuration.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! workers = 4
//! users_base = "/users"
//!
//! [token]
//! secret = "change-me"
//! ttl_secs = 3600
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("failed to render config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ListenConfig,
    /// Bearer token settings
    #[serde(default)]
    pub token: TokenConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker threads handling requests
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Base path assignee sub-paths redirect to
    #[serde(default = "default_users_base")]
    pub users_base: String,
}

/// Bearer token settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Shared signing secret
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_workers() -> usize {
    4
}

fn default_users_base() -> String {
    "/users".to_string()
}

fn default_secret() -> String {
    "change-me".to_string()
}

const fn default_ttl_secs() -> u64 {
    3600
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            users_base: default_users_base(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a specific file
    ///
    /// Values are not range-checked here; call [`Self::validate`] once any
    /// command-line overrides have been applied.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve and load the configuration
    ///
    /// Order: `explicit`, then `TODOS_CONFIG`, then `~/.todos/config.toml`.
    /// Only the default location may be missing; it then yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = paths::env_config() {
            return Self::load_from(&path);
        }

        let path = paths::global_config();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".to_string()));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid("server.workers must be at least 1".to_string()));
        }
        if !self.server.users_base.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "server.users_base must start with '/': {}",
                self.server.users_base
            )));
        }
        if self.token.secret.is_empty() {
            return Err(ConfigError::Invalid("token.secret must not be empty".to_string()));
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
