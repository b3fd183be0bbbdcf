//! Tagged outcomes for metadata store operations.
//!
//! "No file yet" is a normal state for callers and must stay
//! distinguishable from a corrupt file or a filesystem failure, so each
//! gets its own variant rather than a string to match on.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Metadata store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document has been stored for this session
    #[error("no metadata stored for session {session_id}")]
    NotFound { session_id: String },

    /// The file exists but does not hold valid JSON
    #[error("malformed metadata file {path}: {source}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying filesystem failure (permissions, disk)
    #[error("metadata i/o failure at {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be serialized
    #[error("failed to encode metadata document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this is the normal "nothing stored yet" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
