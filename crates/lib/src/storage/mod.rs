//! Per-tab session storage
//!
//! Mirrors the Web Storage contract: string keys, string values, and a
//! missing key means "nothing stored". Implementations use interior
//! mutability so the storage can be shared the way a browser tab shares
//! `sessionStorage`.

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// A string key/value store scoped to one tab.
pub trait SessionStorage {
    /// Get the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}
