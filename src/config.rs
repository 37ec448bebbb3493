use std::path::Path;

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, WINDOW_LENGTH};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Search engine tuning.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed minimax search depth in plies.
    pub search_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: DEFAULT_DEPTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < WINDOW_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {WINDOW_LENGTH}"
            )));
        }
        if self.board.cols < WINDOW_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.cols must be >= {WINDOW_LENGTH}"
            )));
        }
        if self.engine.search_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.search_depth must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
