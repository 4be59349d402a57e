//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// No poll with the requested number
    PollNotFound {
        /// Requested poll number
        number: u32,
        /// Comma-separated list of configured numbers
        available: String,
    },
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::PollNotFound { number, available } => {
                if available.is_empty() {
                    write!(f, "Poll {number} not found (no polls configured)")
                } else {
                    write!(f, "Poll {number} not found (available: {available})")
                }
            }
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<quizpack_core::CoreError> for CliError {
    fn from(err: quizpack_core::CoreError) -> Self {
        CliError::ProcessingError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
