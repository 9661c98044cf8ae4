//! Records owned by the user directory

use serde::{Deserialize, Serialize};

use crate::session::{PermissionLevel, RecordId, UserId, types::null_as_default};

/// A user as stored in the turnos directory.
///
/// The password is kept in plaintext by the directory; shiftgate only ever
/// compares it and never copies it into a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,

    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub display_name: String,

    #[serde(rename = "correo")]
    pub email: String,

    #[serde(rename = "contrasena")]
    pub password: String,

    #[serde(rename = "permisos", default, deserialize_with = "null_as_default")]
    pub permission_level: PermissionLevel,

    /// Blocked accounts cannot log in and hold no permissions
    #[serde(rename = "bloqueado", default, deserialize_with = "null_as_default")]
    pub blocked: bool,
}

impl UserRecord {
    /// Whether `email` and `password` identify this record.
    ///
    /// Emails compare case-insensitively, passwords exactly. Blocked records
    /// never match.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        !self.blocked
            && self.email.to_lowercase() == email.to_lowercase()
            && self.password == password
    }

    /// Decode a user list record by record.
    ///
    /// Records that do not decode are skipped with a warning, so one bad
    /// entry cannot lock every user out. Anything other than an array is an
    /// error.
    pub fn decode_list(value: serde_json::Value) -> serde_json::Result<Vec<UserRecord>> {
        let entries: Vec<serde_json::Value> = serde_json::from_value(value)?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, "Skipping malformed user record: {e}");
                    None
                }
            })
            .collect())
    }
}

/// A casilla (work station / unit) and the users assigned to it.
///
/// Only the name is required; the lists handed back for a single user carry
/// nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casilla {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "usuarios", default, deserialize_with = "null_as_default")]
    pub assigned_users: Vec<UserId>,
}
