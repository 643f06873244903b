//! Logging configuration

use serde::Deserialize;

use super::ValidationError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (overridden by `RUST_LOG` when set)
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Validate the log level name
    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidLogLevel(self.level.clone()))
        }
    }
}
