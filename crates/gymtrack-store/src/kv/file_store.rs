//! Directory of `<key>.json` files
//!
//! Each key maps to one file under the store directory. Missing files read
//! as absent, and removing an absent key succeeds.

#![allow(clippy::result_large_err)]

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gymtrack_core::errors::{ExError, ExErrorKind};
use gymtrack_core::persist::KeyValueStore;

use crate::errors::{io_error, Result};
use crate::kv::atomic::atomic_write;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("kv_key")
                .with_entity_id(key)
                .with_message("key must be non-empty ASCII letters, digits, '-', '_' or '.'"));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("kv_get", e).with_entity_id(key)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|e| e.with_entity_id(key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("kv_remove", e).with_entity_id(key)),
        }
    }
}
