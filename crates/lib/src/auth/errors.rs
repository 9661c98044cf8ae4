//! Authentication error types for the shiftgate library.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur during authentication operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// Unknown email, wrong password or blocked account.
    ///
    /// The three cases are deliberately indistinguishable to callers.
    #[error("Invalid credentials or blocked user")]
    InvalidCredentials,
}

impl AuthError {
    /// Check if this error is a rejected login.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}
