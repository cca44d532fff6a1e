//! Board configuration.
//!
//! Every setting is fixed at start-up. Values come from an optional YAML file;
//! any field it leaves out takes the default below.
//!
//! ```yaml
//! width: 40
//! height: 25
//! cell_size: 16.0
//! tick_interval_ms: 150
//! initial_pattern: glider
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::{ConfigError, Pattern};

pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Side of a rendered cell in points. Only the UI reads this.
    pub cell_size: f32,
    /// Delay between generations while running.
    pub tick_interval_ms: u64,
    /// Built-in pattern stamped at the top-left of the board on start-up.
    pub initial_pattern: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_pattern: None,
        }
    }
}

impl BoardConfig {
    /// Reads and validates a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        info!(path = %path.display(), ?config, "loaded board config");
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if let Some(name) = &self.initial_pattern {
            if Pattern::by_name(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown pattern '{name}'")));
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
