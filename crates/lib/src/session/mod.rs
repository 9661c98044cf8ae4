//! Session records and permission levels
//!
//! A [`Session`] is what survives in per-tab storage after a login: the
//! directory record minus its password.

pub mod level;
pub mod types;

pub use level::PermissionLevel;
pub use types::{RecordId, Session, UserId};
