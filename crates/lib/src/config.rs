//! Configuration for the session façade
//!
//! Every field has a default reproducing the stock turnos pages, so an empty
//! JSON object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, constants};

/// Settings for an [`AuthService`](crate::AuthService).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Storage key holding the serialized session
    pub storage_key: String,

    /// Redirect target when a protected page is opened without a session
    pub login_page: String,

    /// Redirect target when an admin page is opened by a non-admin
    pub access_denied_page: String,

    /// Path fragments of pages that need a session
    pub protected_pages: Vec<String>,

    /// Path fragments of protected pages that also need admin permission
    pub admin_pages: Vec<String>,

    pub login_required_message: String,

    pub access_denied_message: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: constants::SESSION_KEY.to_string(),
            login_page: constants::LOGIN_PAGE.to_string(),
            access_denied_page: constants::ACCESS_DENIED_PAGE.to_string(),
            protected_pages: constants::PROTECTED_PAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            admin_pages: constants::ADMIN_PAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            login_required_message: constants::LOGIN_REQUIRED_MESSAGE.to_string(),
            access_denied_message: constants::ACCESS_DENIED_MESSAGE.to_string(),
        }
    }
}

impl AuthConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
