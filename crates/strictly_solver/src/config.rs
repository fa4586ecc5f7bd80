//! Solver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_board::Player;
use strictly_search::SearchConfig;
use tracing::{debug, info, instrument};

/// Configuration for a solver run.
///
/// ```toml
/// first_player = "O"
///
/// [search]
/// pruning = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Player who moves first in self-play.
    first_player: Player,

    /// Search options.
    search: SearchConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            search: SearchConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first_player = %config.first_player,
            pruning = config.search.pruning(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_player: Option<Player>, no_pruning: bool) -> Self {
        if let Some(player) = first_player {
            self.first_player = player;
        }
        if no_pruning {
            self.search = self.search.with_pruning(false);
        }
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.first_player(), &Player::X);
        assert!(config.search().pruning());
    }

    #[test]
    fn test_partial_toml() {
        let config: SolverConfig = toml::from_str("first_player = \"O\"").unwrap();
        assert_eq!(config.first_player(), &Player::O);
        assert!(config.search().pruning());
    }

    #[test]
    fn test_overrides() {
        let config = SolverConfig::default().with_overrides(Some(Player::O), true);
        assert_eq!(config.first_player(), &Player::O);
        assert!(!config.search().pruning());

        let untouched = SolverConfig::default().with_overrides(None, false);
        assert_eq!(untouched, SolverConfig::default());
    }
}
