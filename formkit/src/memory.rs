//! In-process key-value backend.
//!
//! `MemoryStore` keeps everything in a map and optionally enforces a byte
//! quota, the way browser local storage does. Useful for tests and for
//! sessions that never need to outlive the process.
//!
//! # Example
//!
//! ```rust
//! use formkit::{FormDefinition, FormStore, MemoryStore, RecordStore};
//!
//! let store = RecordStore::new(MemoryStore::new());
//! let id = store.save(&FormDefinition::new("Feedback")).unwrap();
//! assert_eq!(id, 1);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{KeyValueStore, StorageError};

/// A key-value backend held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create a new empty store without a quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of all keys and values, in bytes.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed a value.
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.into(), value.into());
        }
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;

        if let Some(limit) = self.quota {
            let current = items.get(key).map_or(0, |old| key.len() + old.len());
            let requested = size_of_items(&items) - current + key.len() + value.len();
            if requested > limit {
                tracing::warn!(key, requested, limit, "memory store quota exceeded");
                return Err(StorageError::QuotaExceeded { limit, requested });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn size_of_items(items: &HashMap<String, String>) -> usize {
    items.iter().map(|(k, v)| k.len() + v.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("formModels").unwrap(), None);
    }

    #[test]
    fn set_replaces_value() {
        let store = MemoryStore::new();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let store = MemoryStore::new().with_quota(10);
        store.set_item("k", "123456789").unwrap();
        store.set_item("k", "987654321").unwrap();

        let err = store.set_item("k", "1234567890").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                limit: 10,
                requested: 11
            }
        ));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("987654321"));
    }
}
