//! User directory
//!
//! The directory owns the user records, decides which permission levels a
//! user holds and knows which casillas are assigned to whom. shiftgate only
//! reads from it.

pub mod errors;
pub mod in_memory;
pub mod types;

pub use errors::DirectoryError;
pub use in_memory::InMemoryDirectory;
pub use types::{Casilla, UserRecord};

use crate::{Result, session::UserId};

/// Read access to the turnos user directory.
pub trait UserDirectory {
    /// All user records, blocked ones included.
    fn users(&self) -> Result<Vec<UserRecord>>;

    /// Whether the user identified by `user_id` holds the permission `level`.
    fn check_permission(&self, user_id: &UserId, level: &str) -> Result<bool>;

    /// Casillas assigned to the user identified by `user_id`.
    fn assigned_casillas(&self, user_id: &UserId) -> Result<Vec<Casilla>>;
}

/// Find the record matching a login attempt.
///
/// See [`UserRecord::matches_credentials`] for the matching rules.
pub fn find_by_credentials(
    directory: &dyn UserDirectory,
    email: &str,
    password: &str,
) -> Result<Option<UserRecord>> {
    Ok(directory
        .users()?
        .into_iter()
        .find(|user| user.matches_credentials(email, password)))
}
