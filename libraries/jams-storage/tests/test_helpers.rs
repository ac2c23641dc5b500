//! Test helpers and fixtures for storage integration tests
//!
//! These helpers back the stores with REAL files (not the in-memory
//! backend) so write-through persistence and restart behavior are tested
//! against the same code paths production uses.

use jams_core::types::{Identity, Profile};
use jams_storage::FileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test backend wrapper that cleans up its directory on drop
pub struct TestStore {
    store: Arc<FileStore>,
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestStore {
    /// Create a fresh file-backed store in a temp directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("aux-jams.json");
        let store = Arc::new(FileStore::open(&path).expect("Failed to open store"));

        Self {
            store,
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Shared handle to the backend
    pub fn store(&self) -> Arc<FileStore> {
        self.store.clone()
    }

    /// Reopen the backing file as a new handle, simulating a process
    /// restart
    pub fn reopen(&self) -> Arc<FileStore> {
        Arc::new(FileStore::open(&self.path).expect("Failed to reopen store"))
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Test fixture: a registered identity with a valid profile
pub fn test_identity(username: &str) -> Identity {
    Identity::registered(Profile::new(username, "hunter2"))
}
