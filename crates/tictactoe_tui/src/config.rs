//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Milliseconds between frames (event poll timeout).
    frame_interval_ms: u64,

    /// Milliseconds the win banner keeps pulsing.
    fade_duration_ms: u64,

    /// Key that restarts the round.
    restart_key: char,

    /// Width of one board cell, in terminal columns.
    cell_width: u16,

    /// Height of one board cell, in terminal rows.
    cell_height: u16,

    /// Where tracing output goes.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 33,
            fade_duration_ms: 4000,
            restart_key: 'r',
            cell_width: 11,
            cell_height: 5,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::new("frame_interval_ms must be positive".to_string()));
        }
        if self.cell_width < 3 || self.cell_height < 3 {
            return Err(ConfigError::new(
                "cell_width and cell_height must be at least 3".to_string(),
            ));
        }
        if self.restart_key.is_control() {
            return Err(ConfigError::new("restart_key must be printable".to_string()));
        }
        Ok(())
    }

    /// Overrides the log file path.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = path;
    }

    /// Frame interval as a duration.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Banner fade duration as a duration.
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
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
