//! Error types for tuning data loading.

use thiserror::Error;

/// Errors that can occur when loading the jump tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A value is outside the range the jump sequence can use.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
