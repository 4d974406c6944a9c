//! Key-value storage backed by one JSON file per key

use std::path::{Path, PathBuf};

use tracing::trace;

use super::file_io::{read_optional, remove_if_exists, write_atomic};
use super::KeyValueStore;
use crate::error::{FinanceError, FinanceResult};

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds a key's value
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FinanceError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        let path = self.path_for(key)?;
        trace!(path = %path.display(), "reading record");
        read_optional(path)
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        let path = self.path_for(key)?;
        trace!(path = %path.display(), bytes = value.len(), "writing record");
        write_atomic(path, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}
