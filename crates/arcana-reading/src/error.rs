//! Error types for the reading-resolution crate.
//!
//! Resolution itself is total and never returns an error (bad data degrades
//! to sentinels and fallbacks); these types cover the outer conveniences
//! that parse persisted records and strict reading-type tags.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors from the fallible edges of the reading crate.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A persisted reading record could not be deserialized at all.
    #[error("malformed reading record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// A reading-type tag matched none of the nine known spreads.
    #[error("unknown reading type: {0}")]
    UnknownReadingType(String),
}
