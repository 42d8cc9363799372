use crate::{FormDefinition, StorageError, StoredFormRecord};

/// Trait for stores that keep finalized form definitions.
///
/// Every `save` appends a new record; there is no update or delete.
pub trait FormStore {
    /// Load all stored records in insertion order.
    ///
    /// A store that has never been written to returns an empty list.
    fn load(&self) -> Result<Vec<StoredFormRecord>, StorageError>;

    /// Append `definition` as a new record and return its id.
    ///
    /// Ids are one more than the largest id already stored, starting at 1.
    fn save(&self, definition: &FormDefinition) -> Result<u64, StorageError>;
}

/// Trait for string key-value backends, in the manner of browser local storage.
///
/// `set_item` replaces the whole value under `key` in one step.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if it was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: FormStore + ?Sized> FormStore for &S {
    fn load(&self) -> Result<Vec<StoredFormRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, definition: &FormDefinition) -> Result<u64, StorageError> {
        (**self).save(definition)
    }
}

impl<S: FormStore + ?Sized> FormStore for Box<S> {
    fn load(&self) -> Result<Vec<StoredFormRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, definition: &FormDefinition) -> Result<u64, StorageError> {
        (**self).save(definition)
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
