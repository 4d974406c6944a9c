//! Storage layer for finance-tracker
//!
//! The store persists through a small string key-value interface so the
//! medium can be swapped: JSON files on disk for the application, an
//! in-memory map for tests and embedding.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;

/// A durable key-value medium with synchronous reads and writes
///
/// Writes may fail, for instance with
/// [`FinanceError::QuotaExceeded`](crate::error::FinanceError::QuotaExceeded)
/// when the medium is full. A failed `set` must leave the previous value intact.
pub trait KeyValueStore {
    /// Read the value for a key, `None` if it was never written
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Replace the value for a key
    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> FinanceResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        (**self).remove(key)
    }
}

/// Open the file-backed medium under the configured data directory
pub fn open_file_store(paths: &FinancePaths) -> FinanceResult<FileStore> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path());

        let store = open_file_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.dir(), paths.data_dir());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
