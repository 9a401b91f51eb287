//! Key-value storage adapters.
//!
//! All persistent state lives under a handful of string keys holding
//! JSON-encoded values. The adapter contract is deliberately flat:
//! synchronous get/set/remove, with no notion of records or collections.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::{StoreError, StoreResult};

/// Synchronous string-keyed storage with JSON-encoded string values.
///
/// `get` distinguishes an absent key from an empty value; decoding what
/// the value holds is the caller's concern.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::Other(format!("Lock poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Other(format!("Lock poisoned: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Other(format!("Lock poisoned: {}", e)))?;
        values.remove(key);
        Ok(())
    }
}

/// File-backed key-value store: one `<key>.json` document per key under a
/// data directory.
///
/// Values are durable across process restarts for any caller pointed at
/// the same directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("users").unwrap().is_none());

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));

        store.remove("users").unwrap();
        assert!(store.get("users").unwrap().is_none());

        // Removing an absent key is a no-op.
        store.remove("users").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        assert!(store.get("patients").unwrap().is_none());
        store.set("patients", r#"[{"id":"p1"}]"#).unwrap();
        assert_eq!(
            store.get("patients").unwrap().as_deref(),
            Some(r#"[{"id":"p1"}]"#)
        );

        store.remove("patients").unwrap();
        assert!(store.get("patients").unwrap().is_none());
        store.remove("patients").unwrap();
    }

    #[test]
    fn test_file_store_is_durable_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileKeyValueStore::new(dir.path()).unwrap();
        store.set("session", r#"{"id":"1"}"#).unwrap();
        drop(store);

        let reopened = FileKeyValueStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("session").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("clinic");
        let store = FileKeyValueStore::new(&nested).unwrap();
        store.set("users", "[]").unwrap();
        assert!(nested.join("users.json").exists());
    }
}
