//! In-memory user directory with JSON file persistence
//!
//! The file layout matches the export of the turnos `db` object:
//!
//! ```json
//! {
//!   "usuarios": [{"id": 1, "nombre": "Ana", "correo": "ana@x.com",
//!                 "contrasena": "...", "permisos": "coordinador", "bloqueado": false}],
//!   "casillas": [{"id": 10, "nombre": "Caja 1", "usuarios": [1]}]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Casilla, DirectoryError, UserDirectory, UserRecord};
use crate::{Result, session::UserId};

/// A directory held entirely in memory.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryDirectory {
    #[serde(rename = "usuarios", default)]
    users: Vec<UserRecord>,

    #[serde(rename = "casillas", default)]
    casillas: Vec<Casilla>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from existing records.
    pub fn with_records(users: Vec<UserRecord>, casillas: Vec<Casilla>) -> Self {
        Self { users, casillas }
    }

    /// Add a user record.
    pub fn add_user(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Add a casilla.
    pub fn add_casilla(&mut self, casilla: Casilla) {
        self.casillas.push(casilla);
    }

    /// Look up a user by id.
    pub fn user(&self, user_id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| &u.id == user_id)
    }

    /// Block or unblock a user.
    pub fn set_blocked(&mut self, user_id: &UserId, blocked: bool) -> Result<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| &u.id == user_id)
            .ok_or_else(|| DirectoryError::UserNotFound {
                user_id: user_id.to_string(),
            })?;
        user.blocked = blocked;
        Ok(())
    }

    /// Loads a directory from a JSON file.
    ///
    /// Unlike storage loads, a missing file is an error: there is no useful
    /// empty directory to fall back to.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DirectoryError::FileIo { source: e })?;
        let directory: Self =
            serde_json::from_str(&json).map_err(|e| DirectoryError::Malformed { source: e })?;
        tracing::debug!(
            users = directory.users.len(),
            casillas = directory.casillas.len(),
            "Loaded directory from {}",
            path.as_ref().display()
        );
        Ok(directory)
    }

    /// Saves the directory to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| DirectoryError::Malformed { source: e })?;
        std::fs::write(path, json).map_err(|e| DirectoryError::FileIo { source: e })?;
        Ok(())
    }
}

impl UserDirectory for InMemoryDirectory {
    fn users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    fn check_permission(&self, user_id: &UserId, level: &str) -> Result<bool> {
        let granted = match self.user(user_id) {
            Some(user) if !user.blocked => user.permission_level.grants(level),
            _ => false,
        };
        Ok(granted)
    }

    fn assigned_casillas(&self, user_id: &UserId) -> Result<Vec<Casilla>> {
        Ok(self
            .casillas
            .iter()
            .filter(|c| c.assigned_users.contains(user_id))
            .cloned()
            .collect())
    }
}
