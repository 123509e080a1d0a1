//! Core error types for ringdown-core.
//!
//! The countdown itself has no failure states -- it either runs to completion
//! or is stopped. Errors exist only at the configuration and IO boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ringdown-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors for countdown parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Duration must be non-zero
    #[error("duration must be greater than zero")]
    ZeroDuration,

    /// Tick interval must be non-zero
    #[error("tick interval must be greater than zero")]
    ZeroInterval,

    /// A single tick would overshoot the whole countdown
    #[error("tick interval ({interval_ms}ms) exceeds duration ({duration_ms}ms)")]
    IntervalExceedsDuration { interval_ms: u64, duration_ms: u64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
