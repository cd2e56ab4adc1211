//! Configuration errors
//!
//! Resolution itself never fails; only loading resolver options can.

use thiserror::Error;

/// Errors that can occur while building resolver options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read options file
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse options: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Exclusion pattern is not a valid regular expression
    #[error("Invalid exclusion pattern {pattern:?}: {error}")]
    InvalidPattern {
        pattern: String,
        error: regex::Error,
    },
}
