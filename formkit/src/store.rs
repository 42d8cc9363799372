//! Record store: the list of saved form definitions, kept as one JSON array
//! under a single key of a [`KeyValueStore`].

use std::sync::Mutex;

use anyhow::anyhow;

use crate::{FormDefinition, FormStore, KeyValueStore, StorageError, StoredFormRecord};

/// Key the record list is stored under unless configured otherwise.
pub const DEFAULT_STORE_KEY: &str = "formModels";

/// A [`FormStore`] over any key-value backend.
///
/// Each save reads the whole list, appends, and writes the whole list back
/// with one `set_item`. The read-modify-write runs under a lock, so saves
/// through the same store always get distinct ids.
#[derive(Debug)]
pub struct RecordStore<K> {
    backend: K,
    key: String,
    lock: Mutex<()>,
}

impl<K: KeyValueStore> RecordStore<K> {
    /// Create a store using [`DEFAULT_STORE_KEY`].
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_STORE_KEY)
    }

    /// Create a store that keeps its records under `key`.
    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// The key the records live under.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Vec<StoredFormRecord>, StorageError> {
        match self.backend.get_item(&self.key)? {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
                .map_err(|e| StorageError::json(format!("records under '{}'", self.key), e)),
            _ => Ok(Vec::new()),
        }
    }
}

impl<K: KeyValueStore> FormStore for RecordStore<K> {
    fn load(&self) -> Result<Vec<StoredFormRecord>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        self.read()
    }

    fn save(&self, definition: &FormDefinition) -> Result<u64, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        let mut records = self.read()?;
        let id = next_id(&records)?;
        records.push(StoredFormRecord::new(id, definition.clone()));

        let text = serde_json::to_string(&records)
            .map_err(|e| StorageError::json(format!("records under '{}'", self.key), e))?;
        self.backend.set_item(&self.key, &text)?;

        tracing::info!(
            id,
            name = %definition.name,
            items = definition.len(),
            "saved form definition"
        );
        Ok(id)
    }
}

/// The id the next record gets: one past the largest stored id, or 1.
///
/// Fails once the largest stored id is `u64::MAX`.
pub fn next_id(records: &[StoredFormRecord]) -> Result<u64, StorageError> {
    match records.iter().map(|record| record.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| StorageError::backend(anyhow!("record id space exhausted"))),
    }
}
