//! Error types for the hashing engines.

use thiserror::Error;

/// Result type alias for hashing operations.
pub type HashResult<T> = Result<T, HashError>;

/// Errors surfaced by the hashing entry points.
///
/// An absent input buffer is an error, never an alias for an empty buffer:
/// an empty buffer has a defined hash value while a missing one does not.
#[derive(Error, Debug)]
pub enum HashError {
    /// The input buffer was absent (`None`).
    #[error("Input buffer is null")]
    NullInput,

    /// Reading the input from the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
