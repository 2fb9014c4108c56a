//! Error types for the pattern labs.

use thiserror::Error;

/// Result type alias for lab operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors that can occur while running a lab.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
