//! Error types for the user directory

use thiserror::Error;

use crate::Error as CrateError;

/// Errors raised by [`UserDirectory`](super::UserDirectory) implementations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory backing store could not be reached.
    #[error("Directory unavailable: {reason}")]
    Unavailable { reason: String },

    /// A directory operation failed.
    #[error("Directory call {method} failed: {reason}")]
    CallFailed { method: String, reason: String },

    /// The directory returned data that does not match the expected shape.
    #[error("Malformed directory data")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the directory file failed.
    #[error("Directory file I/O error")]
    FileIo {
        #[source]
        source: std::io::Error,
    },

    /// A user referenced by id does not exist.
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },
}

impl DirectoryError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            DirectoryError::UserNotFound { .. } => true,
            DirectoryError::FileIo { source } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, DirectoryError::FileIo { .. })
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, DirectoryError::Malformed { .. })
    }
}

impl From<DirectoryError> for CrateError {
    fn from(err: DirectoryError) -> Self {
        CrateError::Directory(err)
    }
}
