use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_NUM_COLUMNS, DEFAULT_NUM_ROWS, DEFAULT_WIN_LENGTH};

/// Board dimensions and rules, loadable from the `[board]` table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub num_columns: usize,
    pub num_rows: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            num_columns: DEFAULT_NUM_COLUMNS,
            num_rows: DEFAULT_NUM_ROWS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// The engine itself accepts degenerate boards; this rejects setups that
    /// make no sense to sit a player in front of: an empty board, or a win
    /// length no run on the board can reach.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.num_columns == 0 {
            return Err(ConfigError::Validation(
                "board.num_columns must be >= 1".into(),
            ));
        }
        if self.board.num_rows == 0 {
            return Err(ConfigError::Validation(
                "board.num_rows must be >= 1".into(),
            ));
        }
        if self.board.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be >= 1".into(),
            ));
        }
        if self.board.win_length > self.board.num_columns.max(self.board.num_rows) {
            return Err(ConfigError::Validation(
                "board.win_length must fit on the board (at most the larger dimension)".into(),
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
