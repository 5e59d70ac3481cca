//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched any input pattern
    NoInputFiles,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Two options that cannot be used together
    ConflictingOptions(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles => {
                write!(f, "No files found matching the provided patterns")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ConflictingOptions(msg) => write!(f, "Conflicting options: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<smartype_core::Error> for CliError {
    fn from(err: smartype_core::Error) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
