//! Constants used throughout the shiftgate library.
//!
//! This module provides central definitions for the storage key, page paths,
//! DOM attributes and user-facing strings shared by the turnos pages.

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "currentUser";

/// Relative target for redirects to the login form.
pub const LOGIN_PAGE: &str = "login.html";

/// Relative target for redirects after an admin-only page was refused.
pub const ACCESS_DENIED_PAGE: &str = "admin.html";

/// Pages that need a logged-in user.
pub const PROTECTED_PAGES: &[&str] = &["/pages/admin.html", "/pages/configuracion.html"];

/// Protected pages that additionally need admin permission.
pub const ADMIN_PAGES: &[&str] = &["/pages/configuracion.html"];

/// Shown when a protected page is opened without a session.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Debe iniciar sesión para acceder a esta página.";

/// Shown when an admin page is opened by a non-admin.
pub const ACCESS_DENIED_MESSAGE: &str =
    "Acceso denegado. Solo los administradores pueden acceder a esta página.";

/// Attribute marking elements that only admins may see.
pub const ADMIN_ONLY_ATTRIBUTE: &str = "data-admin-only";

/// Attribute naming which session field an element displays.
pub const USER_INFO_ATTRIBUTE: &str = "data-user-info";

/// Text shown in `casilla` bindings for users without assigned casillas.
pub const NO_CASILLA_TEXT: &str = "Sin casilla asignada";

/// Permission level strings understood by the turnos directory.
pub mod levels {
    /// Regular user, can only manage shifts.
    pub const USER: &str = "usuario";
    /// Coordinator, administrative access.
    pub const COORDINATOR: &str = "coordinador";
    /// Developer, full access.
    pub const DEVELOPER: &str = "desarrollador";
    /// Legacy administrator role, still present on older accounts.
    pub const LEGACY_ADMIN: &str = "admin";
}
