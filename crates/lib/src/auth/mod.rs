//! Authentication module for shiftgate
//!
//! This module provides the session façade: credential checks against the
//! user directory, the stored session, permission queries, the page access
//! gate and the permission-driven UI refresh.

pub mod access;
pub mod errors;
pub mod service;

// Re-export main types for easier access
pub use access::{PageAccess, PageRequirement, page_requirement};
pub use errors::AuthError;
pub use service::AuthService;
