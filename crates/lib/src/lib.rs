//!
//! shiftgate: session and permission handling for the turnos shift-management pages.
//!
//! ## Core Concepts
//!
//! * **Sessions (`session::Session`)**: The reduced user record kept in per-tab storage after a successful login.
//! * **Directory (`directory::UserDirectory`)**: The external user store. It supplies user records, answers
//!   permission checks and lists the casillas assigned to a user.
//! * **Storage (`storage::SessionStorage`)**: The per-tab key/value store the session is serialized into.
//! * **Page host (`page::Navigator`, `page::Document`)**: Location, redirects, alerts and the DOM elements that are
//!   shown, hidden or filled in according to the current user.
//! * **AuthService (`auth::AuthService`)**: The façade tying the above together: login, logout, permission
//!   queries, the page access gate and the UI refresh.
//!
//! The `web` feature adds browser implementations of every seam over `web-sys`.

pub mod auth;
pub mod config;
pub mod constants;
pub mod directory;
pub mod page;
pub mod session;
pub mod storage;
#[cfg(feature = "web")]
pub mod web;

pub use auth::AuthService;
pub use config::AuthConfig;
pub use session::Session;

/// Result type used throughout the shiftgate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the shiftgate library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured authentication errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured storage errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),

    /// Structured directory errors from the directory module
    #[error(transparent)]
    Directory(directory::DirectoryError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Auth(_) => "auth",
            Error::Storage(_) => "storage",
            Error::Directory(_) => "directory",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error is a rejected login.
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_invalid_credentials(),
            _ => false,
        }
    }

    /// Check if this error came from the session storage.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Directory(dir_err) => dir_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            Error::Directory(dir_err) => dir_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Directory(dir_err) => dir_err.is_serialization_error(),
            _ => false,
        }
    }
}
