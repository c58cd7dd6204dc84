//! Core error types for quietwindow-core.
//!
//! Analysis failures are data-shape or caller errors, never transient, so
//! nothing here is retried. Provider and configuration failures are wrapped
//! by [`CoreError`] for the outer layers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quietwindow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Normalization or query errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The provider payload carried no weekly popularity series
    #[error("No popularity data available for '{place}'")]
    NoPopularityData { place: String },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the occupancy normalizer and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Raw week has the wrong shape or contains unusable scores
    #[error("Malformed occupancy input: {reason}")]
    MalformedInput { reason: String },

    /// Day index outside 0-6
    #[error("Invalid day index {day}: expected 0-6 (Sunday=0)")]
    InvalidDay { day: u8 },

    /// Requested a ranking of zero entries
    #[error("Invalid count: at least one hour must be requested")]
    InvalidCount,

    /// Nothing is open to recommend
    #[error("{}", no_open_hours_message(.day))]
    NoOpenHours { day: Option<u8> },
}

fn no_open_hours_message(day: &Option<u8>) -> String {
    match day {
        Some(day) => format!("No open hours on day {day}"),
        None => "No open hours in the whole week".to_string(),
    }
}

impl AnalysisError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        AnalysisError::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
