//! Error types for the censorship library.
//!
//! Matching itself never fails. Errors only arise while loading word lists
//! from disk or compiling the configured patterns.

use std::io;
use std::path::PathBuf;

/// Result type alias for censorship operations.
pub type CensorResult<T> = Result<T, CensorError>;

/// Error type for loading and compiling censored word lists.
#[derive(Debug, thiserror::Error)]
pub enum CensorError {
    /// Error occurred while reading a word list or input file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A derived wildcard pattern could not be compiled
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl From<io::Error> for CensorError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<regex::Error> for CensorError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
