//! Key-value backends
//!
//! Two implementations of the [`KeyValueStore`] seam: an in-memory map for
//! tests and ephemeral sessions, and a write-through JSON file standing in
//! for browser local storage. The file backend rewrites its whole document
//! on every mutation, so a crash immediately after a call observes the new
//! state on reload.

use crate::error::StorageError;
use jams_core::{KeyValueStore, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

/// File-backed key-value store with an optional byte quota.
///
/// All entries live in one JSON document on disk. Every `set`/`remove`
/// rewrites the document before returning. A missing file is an empty
/// store; a file that exists but fails to parse is surfaced as corrupt
/// rather than silently discarded.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
    max_bytes: Option<usize>,
}

impl FileStore {
    /// Open a store backed by `path`, creating an empty store if the file
    /// does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_inner(path.into(), None)
    }

    /// Open a store with a quota on the serialized document size
    pub fn with_quota(path: impl Into<PathBuf>, max_bytes: usize) -> Result<Self> {
        Self::open_inner(path.into(), Some(max_bytes))
    }

    fn open_inner(path: PathBuf, max_bytes: Option<usize>) -> Result<Self> {
        let entries = Self::load(&path)?;
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            max_bytes,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let entries = serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    /// Serialize the map and write it through to disk.
    ///
    /// Checked against the quota before anything touches the filesystem.
    fn write_through(&self, entries: &HashMap<String, String>) -> std::result::Result<(), StorageError> {
        let raw = serde_json::to_string(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(limit) = self.max_bytes {
            if raw.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    requested: raw.len(),
                    limit,
                });
            }
        }

        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.write_through(&entries) {
            // Failed writes must not leave the in-memory view ahead of disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e.into());
        }

        tracing::debug!(key, bytes = value.len(), "stored key-value entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.write_through(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e.into());
        }

        tracing::debug!(key, "removed key-value entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jams_core::JamsError;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn removing_absent_key_is_not_an_error() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(reopened.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nothing-here.json")).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, JamsError::Storage(_)));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_quota(dir.path().join("store.json"), 64).unwrap();

        store.set("k", "small").unwrap();

        let big = "x".repeat(256);
        let err = store.set("k", &big).unwrap_err();
        assert!(matches!(err, JamsError::QuotaExceeded { .. }));

        // In-memory view stayed consistent with disk
        assert_eq!(store.get("k").unwrap(), Some("small".to_string()));
    }
}
