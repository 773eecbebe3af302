//! Storage error types.

use std::path::PathBuf;

/// Errors surfaced by the note store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store file could not be opened or its schema could not be created.
    #[error("Failed to open note store at {}: {source}", path.display())]
    Init {
        /// Path that was being opened.
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A write failed and its transaction was rolled back.
    #[error("Failed to save note: {0}")]
    Transaction(#[source] rusqlite::Error),

    /// A read query failed.
    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
