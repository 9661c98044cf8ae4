//! File-backed session storage
//!
//! Each key is stored as `<dir>/<key>.json`. Used by the command line front
//! end, where a state directory plays the part of a browser tab.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{SessionStorage, StorageError};
use crate::Result;

/// Session storage persisted under a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::FileIo {
            key: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::FileIo {
                key: key.to_string(),
                source: e,
            }
            .into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // Readers only ever see a complete value
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value)
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|e| StorageError::FileIo {
                key: key.to_string(),
                source: e,
            })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::FileIo {
                key: key.to_string(),
                source: e,
            }
            .into()),
        }
    }
}
