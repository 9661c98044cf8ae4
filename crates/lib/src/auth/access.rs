//! Page access classification
//!
//! A two-tier gate: some pages need a session, some of those additionally
//! need admin permission. Paths are matched by substring so that both
//! `/pages/admin.html` and `/app/pages/admin.html` are covered.

use crate::AuthConfig;

/// What a page requires of the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequirement {
    /// Anyone may open the page
    Public,
    /// A session is needed
    Authenticated,
    /// A session with admin permission is needed
    Admin,
}

/// Outcome of the page gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    Granted,
    /// No session on a protected page
    LoginRequired,
    /// Session without admin permission on an admin page
    Denied,
}

impl PageAccess {
    pub fn is_granted(self) -> bool {
        self == PageAccess::Granted
    }
}

/// Classify `path` against the configured allow-lists.
///
/// The admin list is only consulted for pages already on the protected list.
pub fn page_requirement(config: &AuthConfig, path: &str) -> PageRequirement {
    let listed = |pages: &[String]| pages.iter().any(|page| path.contains(page.as_str()));

    if !listed(&config.protected_pages) {
        PageRequirement::Public
    } else if listed(&config.admin_pages) {
        PageRequirement::Admin
    } else {
        PageRequirement::Authenticated
    }
}
