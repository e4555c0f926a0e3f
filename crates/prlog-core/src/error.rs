//! Error types for prlog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PrlogError
pub type Result<T> = std::result::Result<T, PrlogError>;

/// Main error type for prlog operations
#[derive(Debug, Error)]
pub enum PrlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pull request input errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Changelog file errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Configuration file already exists
    #[error("Configuration file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Label group declares a type that is neither `combined` nor `separate`
    #[error("Unknown type '{kind}' for label group '{group}' (expected combined or separate)")]
    UnknownGroupType { group: String, kind: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the pull request from the event payload
#[derive(Debug, Error)]
pub enum InputError {
    /// Event payload file not found
    #[error("Event payload not found at {0}")]
    EventNotFound(PathBuf),

    /// Event carries no pull request
    #[error("Event payload does not contain a pull request")]
    MissingPullRequest,

    /// Pull request is missing a required field
    #[error("Pull request is missing required field: {0}")]
    MissingField(String),

    /// Payload is not valid JSON
    #[error("Failed to parse event payload: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error reading event payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog file errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to read the existing changelog
    #[error("Failed to read changelog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the changelog
    #[error("Failed to write changelog {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}
