//! In-process key-value storage with an optional byte quota

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{FinanceError, FinanceResult};

/// Keeps records in a map; nothing survives the process
///
/// With a capacity set, a write that would push the total size of keys and
/// values past it fails with [`FinanceError::QuotaExceeded`] and leaves the
/// previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes past `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        if let Some(capacity) = self.capacity {
            let existing = self.entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let available = capacity.saturating_sub(self.used_bytes() - existing);
            let needed = key.len() + value.len();
            if needed > available {
                return Err(FinanceError::QuotaExceeded { needed, available });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let mut store = MemoryStore::with_capacity(10);
        store.set("k", "12345").unwrap();

        let err = store.set("k", "1234567890").unwrap_err();
        assert!(matches!(
            err,
            FinanceError::QuotaExceeded {
                needed: 11,
                available: 10
            }
        ));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("12345"));
    }

    #[test]
    fn test_overwrite_reuses_space() {
        let mut store = MemoryStore::with_capacity(6);
        store.set("k", "12345").unwrap();
        store.set("k", "54321").unwrap();
        assert_eq!(store.used_bytes(), 6);
    }
}
