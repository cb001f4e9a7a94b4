//! In-memory store: the default for tests and throwaway sessions.

use std::collections::HashMap;

use crate::{KeyValueStore, StoreError, is_valid_key};

/// A [`KeyValueStore`] backed by a `HashMap`.
///
/// Nothing survives the process. Useful wherever durability doesn't
/// matter and a store still has to be plugged in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check_key(key: &str) -> Result<(), StoreError> {
        if is_valid_key(key) {
            Ok(())
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Self::check_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        Self::check_key(key)?;
        self.slots.insert(key.to_string(), value.to_vec());
        tracing::debug!(key, bytes = value.len(), "memory slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::check_key(key)?;
        if self.slots.remove(key).is_some() {
            tracing::debug!(key, "memory slot removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.set("slot", b"first").unwrap();
        store.set("slot", b"second").unwrap();

        assert_eq!(store.get("slot").unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set("slot", b"x").unwrap();

        store.remove("slot").unwrap();
        store.remove("slot").unwrap();

        assert!(store.is_empty());
        assert_eq!(store.get("slot").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_invalid_key() {
        let mut store = MemoryStore::new();
        let result = store.set("a/b", b"x");
        assert!(matches!(result, Err(StoreError::InvalidKey(k)) if k == "a/b"));
    }

    #[test]
    fn test_get_and_remove_reject_invalid_key() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(k)) if k.is_empty()));
        assert!(matches!(store.get("../up"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.remove("a/b"), Err(StoreError::InvalidKey(k)) if k == "a/b"));
    }
}
