//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("min_items must be at least 1")]
    MinItemsTooSmall,

    #[error("{field} ({value}) must not be below min_items ({min_items})")]
    MaximumBelowMinimum {
        field: &'static str,
        value: usize,
        min_items: usize,
    },

    #[error("{field} ({value}) exceeds the largest supported matrix size ({limit})")]
    MaximumTooLarge {
        field: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}
