//! Session configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file yields the
//! standard two-player rule with Classic preselected.
//!
//! `min_players` is an extension point. The game as shipped starts with two
//! players; any other value changes that rule and is opt-in per deployment.
//!
//! ```toml
//! min_players = 2
//! default_mode = "Classic"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::mode::GameMode;

/// Players needed before a game may start.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Tunables applied when a session is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Minimum player count for `start` to succeed.
    ///
    /// Defaults to [`DEFAULT_MIN_PLAYERS`]. Values other than 2 depart from
    /// the standard rule.
    pub min_players: usize,

    /// Mode preselected in a fresh session
    pub default_mode: GameMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            default_mode: GameMode::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("min_players must be at least 1")]
    InvalidMinPlayers,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(?config, "Loaded session config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players == 0 {
            return Err(ConfigError::InvalidMinPlayers);
        }
        Ok(())
    }
}
