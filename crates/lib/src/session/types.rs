//! Core data types for sessions

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::PermissionLevel;
use crate::directory::UserRecord;

/// Identifier of a directory record (users and casillas).
///
/// The turnos directory hands out numeric ids for most records but older
/// exports carry string ids. Both are kept in their original JSON form so a
/// stored session can be passed back to the directory unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

/// Identifier of a user in the directory.
pub type UserId = RecordId;

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Text(id)
    }
}

/// Deserialize an optional field, reading `null` as the default value.
///
/// Use together with `#[serde(default)]` so a missing field behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The reduced user record kept for the lifetime of a tab.
///
/// Field names on the wire match what the turnos pages already store under
/// the session key, so sessions written by either side stay readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Directory id of the logged-in user
    pub id: UserId,

    /// Name shown in the page header
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub display_name: String,

    /// Email as stored in the directory (not as typed at login)
    #[serde(rename = "correo")]
    pub email: String,

    /// Role string used for labels and permission checks
    #[serde(rename = "permisos", default, deserialize_with = "null_as_default")]
    pub permission_level: PermissionLevel,
}

impl From<&UserRecord> for Session {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            permission_level: record.permission_level.clone(),
        }
    }
}
