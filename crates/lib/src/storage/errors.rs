//! Error types for session storage

use thiserror::Error;

use crate::Error;

/// Errors raised by [`SessionStorage`](super::SessionStorage) implementations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage area does not exist (no window, storage disabled, ...).
    #[error("Session storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// Reading a key failed.
    #[error("Failed to read {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    /// Writing a key failed (quota exceeded, read-only area, ...).
    #[error("Failed to write {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    /// File-backed storage I/O failure.
    #[error("Session file I/O error for {key}")]
    FileIo {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error means the storage area itself is missing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable { .. })
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}
