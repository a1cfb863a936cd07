//! Error types for the rowsift library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rowsift operations.
///
/// Every variant is fatal to a run. Rows that fail validation are not
/// errors; they come back as an invalid [`ValidationOutcome`](crate::ValidationOutcome).
#[derive(Debug, Error)]
pub enum RowsiftError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A rule row is malformed.
    #[error("Rule definition error at line {line}: {message}")]
    RuleDefinition { line: usize, message: String },

    /// A rule's pattern does not compile.
    #[error("Invalid pattern '{pattern}' at rule line {line}: {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RowsiftError {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RowsiftError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for rowsift operations.
pub type Result<T> = std::result::Result<T, RowsiftError>;
