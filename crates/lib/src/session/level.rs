//! Permission levels and their display strings
//!
//! The turnos directory stores a single role string per user. Besides the
//! three current roles it still contains accounts with the legacy `admin`
//! role, which is displayed like a coordinator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::levels;

/// Role of a user, as stored in the directory and in the session.
///
/// Unknown role strings are kept verbatim in [`PermissionLevel::Other`] so
/// that nothing is lost when a session is written back to storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermissionLevel {
    /// `usuario`
    #[default]
    User,
    /// `coordinador`
    Coordinator,
    /// `desarrollador`
    Developer,
    /// `admin`, kept for accounts created before the coordinator role existed
    LegacyAdmin,
    /// Any other role string
    Other(String),
}

impl PermissionLevel {
    /// The role string as stored.
    pub fn as_str(&self) -> &str {
        match self {
            PermissionLevel::User => levels::USER,
            PermissionLevel::Coordinator => levels::COORDINATOR,
            PermissionLevel::Developer => levels::DEVELOPER,
            PermissionLevel::LegacyAdmin => levels::LEGACY_ADMIN,
            PermissionLevel::Other(s) => s,
        }
    }

    /// Label shown in `permisos` bindings.
    pub fn label(&self) -> &'static str {
        match self {
            PermissionLevel::Developer => "Desarrollador",
            PermissionLevel::Coordinator => "Coordinador",
            PermissionLevel::LegacyAdmin => "Administrador",
            PermissionLevel::User | PermissionLevel::Other(_) => "Usuario",
        }
    }

    /// Description shown in `permisos-desc` bindings.
    pub fn description(&self) -> &'static str {
        match self {
            PermissionLevel::Developer => "Acceso completo al sistema",
            PermissionLevel::Coordinator | PermissionLevel::LegacyAdmin => "Acceso administrativo",
            PermissionLevel::User | PermissionLevel::Other(_) => "Solo puede gestionar turnos",
        }
    }

    /// Whether a user holding this level satisfies a check for `requested`.
    ///
    /// - `usuario` is held by everyone
    /// - `admin` is held by coordinators, developers and legacy admins
    /// - `coordinador` is held by coordinators and legacy admins
    /// - `desarrollador` is held by developers only
    /// - any other level needs an exact match
    pub fn grants(&self, requested: &str) -> bool {
        match requested {
            levels::USER => true,
            levels::LEGACY_ADMIN => matches!(
                self,
                PermissionLevel::Coordinator
                    | PermissionLevel::Developer
                    | PermissionLevel::LegacyAdmin
            ),
            levels::COORDINATOR => matches!(
                self,
                PermissionLevel::Coordinator | PermissionLevel::LegacyAdmin
            ),
            levels::DEVELOPER => matches!(self, PermissionLevel::Developer),
            other => self.as_str() == other,
        }
    }
}

impl From<String> for PermissionLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            levels::USER => PermissionLevel::User,
            levels::COORDINATOR => PermissionLevel::Coordinator,
            levels::DEVELOPER => PermissionLevel::Developer,
            levels::LEGACY_ADMIN => PermissionLevel::LegacyAdmin,
            _ => PermissionLevel::Other(s),
        }
    }
}

impl From<&str> for PermissionLevel {
    fn from(s: &str) -> Self {
        PermissionLevel::from(s.to_string())
    }
}

impl From<PermissionLevel> for String {
    fn from(level: PermissionLevel) -> Self {
        match level {
            PermissionLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
