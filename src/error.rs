//! Error types for the settings file and the high score file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or checking `Settings`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{path}': {details}")]
    Parse { path: PathBuf, details: String },

    /// A value is outside the range the game can run with.
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised by the persisted high score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Failed to read high score '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write high score '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("High score file '{path}' is not a JSON integer: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
