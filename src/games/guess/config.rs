//! Game configuration for the guessing game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Immutable rules for a guessing game, fixed at construction.
///
/// Every key is optional in TOML; missing keys take the classic values
/// (7 attempts, warning at 3, numbers 1 through 100, 100ms color cycle).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfiguration {
    /// Guesses allowed per session.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,

    /// Remaining-attempts level at or below which the display warns.
    #[serde(default = "default_warning_threshold")]
    warning_threshold: u32,

    /// Smallest value the secret can take.
    #[serde(default = "default_min_number")]
    min_number: i64,

    /// Largest value the secret can take.
    #[serde(default = "default_max_number")]
    max_number: i64,

    /// Period of the cosmetic color cycle shown after a win.
    #[serde(default = "default_color_cycle_interval_ms")]
    color_cycle_interval_ms: u64,
}

fn default_max_attempts() -> u32 {
    7
}

fn default_warning_threshold() -> u32 {
    3
}

fn default_min_number() -> i64 {
    1
}

fn default_max_number() -> i64 {
    100
}

fn default_color_cycle_interval_ms() -> u64 {
    100
}

impl GameConfiguration {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the values cannot describe a playable game.
    #[instrument]
    pub fn new(
        max_attempts: u32,
        warning_threshold: u32,
        min_number: i64,
        max_number: i64,
        color_cycle_interval_ms: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_attempts,
            warning_threshold,
            min_number,
            max_number,
            color_cycle_interval_ms,
        };
        config.validate()?;
        Ok(config)
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
            max_attempts = config.max_attempts,
            min_number = config.min_number,
            max_number = config.max_number,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Renders the configuration as a TOML document.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Color cycle period as a [`Duration`].
    pub fn color_cycle_interval(&self) -> Duration {
        Duration::from_millis(self.color_cycle_interval_ms)
    }

    /// Returns true if `value` lies within the configured bounds.
    pub fn contains(&self, value: i64) -> bool {
        (self.min_number..=self.max_number).contains(&value)
    }

    #[track_caller]
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be positive"));
        }
        if self.warning_threshold > self.max_attempts {
            return Err(ConfigError::new(format!(
                "warning_threshold ({}) must not exceed max_attempts ({})",
                self.warning_threshold, self.max_attempts
            )));
        }
        if self.min_number >= self.max_number {
            return Err(ConfigError::new(format!(
                "min_number ({}) must be less than max_number ({})",
                self.min_number, self.max_number
            )));
        }
        if self.color_cycle_interval_ms == 0 {
            return Err(ConfigError::new("color_cycle_interval_ms must be positive"));
        }
        Ok(())
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            warning_threshold: default_warning_threshold(),
            min_number: default_min_number(),
            max_number: default_max_number(),
            color_cycle_interval_ms: default_color_cycle_interval_ms(),
        }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
