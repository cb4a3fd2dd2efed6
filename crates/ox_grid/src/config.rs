//! Board configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Dimensions and win length of a board.
///
/// ```toml
/// size = 15
/// cells_to_win = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GridConfig {
    /// Board side length; the board has `size * size` cells.
    #[serde(default = "default_size")]
    size: usize,

    /// Length of a winning run. Falls back to `size` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cells_to_win: Option<usize>,
}

fn default_size() -> usize {
    3
}

impl GridConfig {
    /// Creates a configuration where a full row, column or diagonal wins.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells_to_win: None,
        }
    }

    /// Sets an explicit win length.
    pub fn with_cells_to_win(mut self, cells_to_win: usize) -> Self {
        self.cells_to_win = Some(cells_to_win);
        self
    }

    /// Win length after applying the default.
    pub fn effective_cells_to_win(&self) -> usize {
        self.cells_to_win.unwrap_or(self.size)
    }

    /// Checks that the board is satisfiable.
    ///
    /// # Errors
    ///
    /// Fails when the board is empty, the win length is zero or longer than
    /// a side, or the side does not fit signed coordinates.
    #[instrument(skip(self), fields(size = self.size, cells_to_win = ?self.cells_to_win))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells_to_win = self.effective_cells_to_win();

        let problem = if self.size == 0 {
            Some("Board size must be at least 1".to_string())
        } else if i32::try_from(self.size).is_err() {
            Some(format!("Board size {} does not fit coordinates", self.size))
        } else if cells_to_win == 0 {
            Some("cells_to_win must be at least 1".to_string())
        } else if cells_to_win > self.size {
            Some(format!(
                "cells_to_win ({}) exceeds board size ({})",
                cells_to_win, self.size
            ))
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(%message, "Rejected grid configuration");
                Err(ConfigError::new(message))
            }
            None => Ok(()),
        }
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(
            size = config.size,
            cells_to_win = config.effective_cells_to_win(),
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(default_size())
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
