//! Core error types for dayboard-core.
//!
//! This module defines the error hierarchy using thiserror. Selection,
//! filtering, and the school-hours check are total over the static dataset
//! and have no error paths; everything that can fail funnels through here.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Core error type for dayboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Summary generation errors
    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

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

/// Summary-collaborator errors.
///
/// The collaborator may reject for any reason; the dashboard catches this at
/// the call site and substitutes the fallback text, so callers never need to
/// match on the cause.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The collaborator rejected the request.
    #[error("summary generation failed: {0}")]
    Generation(String),
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

    /// No config directory could be resolved for this platform
    #[error("No configuration directory available")]
    NoConfigDir,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Reference to a profile id that does not exist
    #[error("Unknown profile id: {id}")]
    UnknownProfile { id: i64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
