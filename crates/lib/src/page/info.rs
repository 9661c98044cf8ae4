//! Session fields that can be bound into the page
//!
//! Elements carry `data-user-info="<key>"`; each key maps to one
//! [`InfoField`] and each field knows how to render itself.

use std::{fmt, str::FromStr};

use crate::{constants::NO_CASILLA_TEXT, directory::UserDirectory, session::Session};

/// A session field shown through a `data-user-info` binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfoField {
    /// `nombre`
    Name,
    /// `correo`
    Email,
    /// `permisos`
    PermissionLabel,
    /// `permisos-desc`
    PermissionDescription,
    /// `casilla`
    Casilla,
}

impl InfoField {
    /// Every field, in display order.
    pub const ALL: [InfoField; 5] = [
        InfoField::Name,
        InfoField::Email,
        InfoField::PermissionLabel,
        InfoField::PermissionDescription,
        InfoField::Casilla,
    ];

    /// The attribute value selecting this field.
    pub fn key(self) -> &'static str {
        match self {
            InfoField::Name => "nombre",
            InfoField::Email => "correo",
            InfoField::PermissionLabel => "permisos",
            InfoField::PermissionDescription => "permisos-desc",
            InfoField::Casilla => "casilla",
        }
    }

    /// Field for an attribute value, `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Text to show for `session`.
    ///
    /// Only [`InfoField::Casilla`] consults the directory. A directory failure
    /// there renders like a user without casillas.
    pub fn render(self, session: &Session, directory: &dyn UserDirectory) -> String {
        match self {
            InfoField::Name => session.display_name.clone(),
            InfoField::Email => session.email.clone(),
            InfoField::PermissionLabel => session.permission_level.label().to_string(),
            InfoField::PermissionDescription => {
                session.permission_level.description().to_string()
            }
            InfoField::Casilla => {
                let casillas = directory
                    .assigned_casillas(&session.id)
                    .unwrap_or_else(|e| {
                        tracing::error!(user_id = %session.id, "Failed to load casillas: {e}");
                        Vec::new()
                    });
                if casillas.is_empty() {
                    NO_CASILLA_TEXT.to_string()
                } else {
                    casillas
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
        }
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for attribute values that name no [`InfoField`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown user info field: {0}")]
pub struct UnknownInfoField(pub String);

impl FromStr for InfoField {
    type Err = UnknownInfoField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownInfoField(s.to_string()))
    }
}
