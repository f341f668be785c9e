//! Game configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_DEPTH, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// Loaded from an optional TOML file; command-line flags override it.
///
/// ```toml
/// engine = "O"
/// depth = 9
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side the engine plays.
    #[serde(default = "default_engine")]
    engine: Player,

    /// Plies the engine searches ahead.
    #[serde(default = "default_depth")]
    depth: u8,
}

#[instrument]
fn default_engine() -> Player {
    Player::O
}

#[instrument]
fn default_depth() -> u8 {
    DEFAULT_DEPTH
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(engine: Player, depth: u8) -> Self {
        Self { engine, depth }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.depth == 0 {
            return Err(ConfigError::new("depth must be at least 1".to_string()));
        }

        info!(engine = %config.engine, depth = config.depth, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise starts from defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(self, engine: Option<Player>, depth: Option<u8>) -> Self {
        Self {
            engine: engine.unwrap_or(self.engine),
            depth: depth.unwrap_or(self.depth),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_engine(), default_depth())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
