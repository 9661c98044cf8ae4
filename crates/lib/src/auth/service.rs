//! The session façade
//!
//! [`AuthService`] owns the current [`Session`] and the collaborators it
//! talks to. One service is built per page (or per CLI invocation) and handed
//! to whoever needs it.

use super::{
    AuthError,
    access::{self, PageAccess, PageRequirement},
};
use crate::{
    AuthConfig, Result,
    constants::{ADMIN_ONLY_ATTRIBUTE, USER_INFO_ATTRIBUTE, levels},
    directory::{self, UserDirectory},
    page::{Document, Element, InfoField, Navigator, attribute_selector},
    session::Session,
    storage::SessionStorage,
};

/// Login state and permission checks for one tab.
pub struct AuthService {
    config: AuthConfig,
    directory: Box<dyn UserDirectory>,
    storage: Box<dyn SessionStorage>,
    navigator: Box<dyn Navigator>,
    current: Option<Session>,
}

impl AuthService {
    /// Create the service and restore any session already in storage.
    ///
    /// # Arguments
    /// * `config` - Storage key, page lists and messages
    /// * `directory` - Source of user records and permission answers
    /// * `storage` - Per-tab storage the session lives in
    /// * `navigator` - Location, redirects and alerts of the current page
    pub fn new(
        config: AuthConfig,
        directory: Box<dyn UserDirectory>,
        storage: Box<dyn SessionStorage>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let mut service = Self {
            config,
            directory,
            storage,
            navigator,
            current: None,
        };
        service.reload();
        service
    }

    /// The configuration in use.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// The directory in use.
    pub fn directory(&self) -> &dyn UserDirectory {
        self.directory.as_ref()
    }

    // === Session lifecycle ===

    /// Re-read the session from storage.
    ///
    /// A read or parse failure is logged and leaves the service logged out.
    pub fn reload(&mut self) {
        self.current = self.load_session();
    }

    fn load_session(&self) -> Option<Session> {
        let key = &self.config.storage_key;
        let raw = match self.storage.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!("Failed to read stored session: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                tracing::debug!(user_id = %session.id, "Restored session from storage");
                Some(session)
            }
            Err(e) => {
                tracing::error!("Failed to parse stored session: {e}");
                None
            }
        }
    }

    /// Log in with `email` and `password`.
    ///
    /// The email is compared case-insensitively and the password exactly;
    /// blocked users are rejected. Every rejection is the same
    /// [`AuthError::InvalidCredentials`]. The session is written to storage
    /// before it becomes current, so a storage failure leaves the service
    /// logged out.
    ///
    /// # Returns
    /// The new session
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        let Some(user) = directory::find_by_credentials(self.directory.as_ref(), email, password)?
        else {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials.into());
        };

        let session = Session::from(&user);
        let json = serde_json::to_string(&session)?;
        self.storage.set_item(&self.config.storage_key, &json)?;
        tracing::info!(
            user_id = %session.id,
            permission = %session.permission_level,
            "User logged in"
        );

        self.current = Some(session.clone());
        Ok(session)
    }

    /// End the session and send the page to the login form.
    ///
    /// The in-memory session is always cleared and the redirect always
    /// happens; a failure to remove the stored copy is returned afterwards.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(session) = self.current.take() {
            tracing::info!(user_id = %session.id, "User logged out");
        }
        let removed = self.storage.remove_item(&self.config.storage_key);
        if let Err(e) = &removed {
            tracing::error!("Failed to remove stored session: {e}");
        }
        self.navigator.redirect(&self.config.login_page);
        removed
    }

    /// Whether someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The current session, if any.
    pub fn current_user(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    // === Permissions ===

    /// Whether the current user holds `level`, as decided by the directory.
    ///
    /// Always false without a session. A directory failure counts as a denial.
    pub fn has_permission(&self, level: &str) -> bool {
        let Some(session) = &self.current else {
            return false;
        };
        match self.directory.check_permission(&session.id, level) {
            Ok(granted) => granted,
            Err(e) => {
                tracing::error!(
                    user_id = %session.id,
                    requested = level,
                    "Permission check failed: {e}"
                );
                false
            }
        }
    }

    /// Admin access (coordinators and developers).
    pub fn is_admin(&self) -> bool {
        self.has_permission(levels::LEGACY_ADMIN)
    }

    pub fn is_coordinator(&self) -> bool {
        self.has_permission(levels::COORDINATOR)
    }

    pub fn is_developer(&self) -> bool {
        self.has_permission(levels::DEVELOPER)
    }

    // === Page gate ===

    /// What `path` requires under the configured allow-lists.
    pub fn page_requirement(&self, path: &str) -> PageRequirement {
        access::page_requirement(&self.config, path)
    }

    /// Evaluate the gate for `path` without alerting or redirecting.
    pub fn page_access(&self, path: &str) -> PageAccess {
        match self.page_requirement(path) {
            PageRequirement::Public => PageAccess::Granted,
            _ if !self.is_authenticated() => PageAccess::LoginRequired,
            PageRequirement::Admin if !self.is_admin() => PageAccess::Denied,
            _ => PageAccess::Granted,
        }
    }

    /// Gate the current page.
    ///
    /// Without a session on a protected page, alerts and redirects to the
    /// login page. On an admin page without admin permission, alerts and
    /// redirects to the access-denied page.
    ///
    /// # Returns
    /// `true` if the user may stay on the page
    pub fn check_page_access(&self) -> bool {
        let path = self.navigator.current_path();
        let access = self.page_access(&path);
        match access {
            PageAccess::Granted => {}
            PageAccess::LoginRequired => {
                tracing::warn!(path = %path, "Protected page opened without a session");
                self.navigator.alert(&self.config.login_required_message);
                self.navigator.redirect(&self.config.login_page);
            }
            PageAccess::Denied => {
                tracing::warn!(path = %path, "Admin page opened without admin permission");
                self.navigator.alert(&self.config.access_denied_message);
                self.navigator.redirect(&self.config.access_denied_page);
            }
        }
        access.is_granted()
    }

    // === UI ===

    /// Show or hide admin-only elements and fill in user info bindings.
    ///
    /// Without a session the admin-only elements are hidden and the info
    /// bindings are left untouched.
    pub fn update_ui<D: Document>(&self, document: &D) {
        let Some(session) = &self.current else {
            set_admin_visibility(document, false);
            return;
        };

        set_admin_visibility(document, self.is_admin());

        for element in document.query_all(&attribute_selector(USER_INFO_ATTRIBUTE)) {
            let Some(key) = element.attribute(USER_INFO_ATTRIBUTE) else {
                continue;
            };
            match InfoField::from_key(&key) {
                Some(field) => element.set_text(&field.render(session, self.directory.as_ref())),
                None => tracing::debug!(key = %key, "Ignoring unknown user info binding"),
            }
        }
    }

    /// Page-load hook: gate the page, then refresh the UI.
    ///
    /// # Returns
    /// The result of [`check_page_access`](Self::check_page_access)
    pub fn on_page_load<D: Document>(&self, document: &D) -> bool {
        let granted = self.check_page_access();
        self.update_ui(document);
        granted
    }
}

fn set_admin_visibility<D: Document>(document: &D, visible: bool) {
    for element in document.query_all(&attribute_selector(ADMIN_ONLY_ATTRIBUTE)) {
        element.set_visible(visible);
    }
}
