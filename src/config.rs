//! Configuration management
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! or missing file yields a working configuration.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3002
//!
//! [storage]
//! data_file = "behavior.json"
//!
//! [matching]
//! threshold = 0.5
//!
//! [leaderboard]
//! size = 5
//!
//! [[users]]
//! id = "u1"
//! name = "Aditi"
//! skills = ["frontend", "react"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::TaskBoard;
use crate::core::services::{DEFAULT_LEADERBOARD_SIZE, DEFAULT_THRESHOLD};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Behavior data persistence
    #[serde(default)]
    pub storage: StorageConfig,
    /// Skill matcher settings
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Leaderboard settings
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    /// Users on the roster at startup
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3002
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Behavior data persistence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding behavior records; in-memory only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Skill matcher settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum match score for an assignment
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Leaderboard settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Number of entries returned
    #[serde(default = "default_leaderboard_size")]
    pub size: usize,
}

const fn default_leaderboard_size() -> usize {
    DEFAULT_LEADERBOARD_SIZE
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            size: default_leaderboard_size(),
        }
    }
}

/// A roster entry declared in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    /// User id
    pub id: String,
    /// Display name
    pub name: String,
    /// Skill tags
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Config {
    /// Default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    log::debug!("No config at {}, using defaults", default_path.display());
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reject settings the services cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.matching.threshold) {
            anyhow::bail!(
                "matching.threshold must be between 0 and 1, got {}",
                self.matching.threshold
            );
        }
        if self.leaderboard.size == 0 {
            anyhow::bail!("leaderboard.size must be at least 1");
        }
        Ok(())
    }

    /// Build a task board holding the configured roster
    pub fn seed_board(&self) -> anyhow::Result<TaskBoard> {
        let mut board = TaskBoard::new();
        for seed in &self.users {
            board
                .create_user(&seed.id, &seed.name, &seed.skills)
                .with_context(|| format!("invalid [[users]] entry '{}'", seed.id))?;
        }
        Ok(board)
    }
}
