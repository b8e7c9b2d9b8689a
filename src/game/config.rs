use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the game
///
/// Every field has a default, so a config file may set only the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square, wrap-around grid
    pub grid_size: usize,
    /// Length of the snake after a restart
    pub initial_snake_length: usize,

    // Speed ramp
    /// Tick interval at the start of a fresh game, in milliseconds
    pub initial_tick_ms: u64,
    /// How much faster the game gets per completed word, in milliseconds
    pub tick_step_ms: u64,
    /// The tick interval never drops below this, in milliseconds
    pub min_tick_ms: u64,

    /// Random samples tried per letter before leaving it off the board
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            initial_tick_ms: 140,
            tick_step_ms: 4,
            min_tick_ms: 80,
            placement_attempts: 5000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn initial_tick(&self) -> Duration {
        Duration::from_millis(self.initial_tick_ms)
    }

    pub fn tick_step(&self) -> Duration {
        Duration::from_millis(self.tick_step_ms)
    }

    pub fn min_tick(&self) -> Duration {
        Duration::from_millis(self.min_tick_ms)
    }

    /// Interval after one more completed word, floored at `min_tick`
    pub fn next_tick(&self, current: Duration) -> Duration {
        current.saturating_sub(self.tick_step()).max(self.min_tick())
    }

    /// Check that all parameters are in valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }

        if self.grid_size > i32::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "grid_size is too large: {}",
                self.grid_size
            )));
        }

        // A snake as long as a row would wrap onto its own tail
        if self.initial_snake_length == 0 || self.initial_snake_length >= self.grid_size {
            return Err(ConfigError::Invalid(format!(
                "initial_snake_length must be in [1, {}], got {}",
                self.grid_size - 1,
                self.initial_snake_length
            )));
        }

        if self.min_tick_ms == 0 {
            return Err(ConfigError::Invalid(
                "min_tick_ms must be positive".to_string(),
            ));
        }

        if self.initial_tick_ms < self.min_tick_ms {
            return Err(ConfigError::Invalid(format!(
                "initial_tick_ms ({}) cannot be below min_tick_ms ({})",
                self.initial_tick_ms, self.min_tick_ms
            )));
        }

        if self.placement_attempts == 0 {
            return Err(ConfigError::Invalid(
                "placement_attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
