//! Persistence capability for the authorization flag.
//!
//! DESIGN
//! ======
//! The reducer treats persistence as fire-and-forget: `store` has an
//! infallible signature and implementations swallow their own IO failures
//! (logging them), so a broken store never blocks a state transition. The
//! trait is injected into the reducer explicitly rather than reached
//! through a global.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::state::StoredAuth;

// =============================================================================
// CAPABILITY
// =============================================================================

/// Minimal key-value capability the reducer persists through.
pub trait AuthStorage {
    /// Read whatever subset of the auth record is currently persisted.
    /// Called once at process start to seed initial state.
    fn load(&self) -> StoredAuth;

    /// Merge the supplied fields into the persistent record. Failures are
    /// the implementation's concern; callers never observe them.
    fn store(&self, partial: &StoredAuth);
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage backed by a mutex-guarded record.
///
/// The mutex exists only so the capability is `Send + Sync` when shared
/// with a collaborator; the reducer itself is single-writer.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<StoredAuth>,
}

impl MemoryStorage {
    /// Empty storage (nothing persisted yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `record`.
    #[must_use]
    pub fn with_record(record: StoredAuth) -> Self {
        Self { record: Mutex::new(record) }
    }
}

impl AuthStorage for MemoryStorage {
    fn load(&self) -> StoredAuth {
        match self.record.lock() {
            Ok(record) => record.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, partial: &StoredAuth) {
        match self.record.lock() {
            Ok(mut record) => record.merge(partial),
            Err(poisoned) => poisoned.into_inner().merge(partial),
        }
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// Internal IO error for [`FileStorage`]; logged, never surfaced.
#[derive(Debug, thiserror::Error)]
enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON-file storage so the authorization flag survives process restarts.
///
/// A missing or corrupt file reads as the empty record; a failed write is
/// logged and dropped.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the JSON file at `path`. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_record(&self) -> Result<StoredAuth, StorageError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_record(&self, record: &StoredAuth) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl AuthStorage for FileStorage {
    fn load(&self) -> StoredAuth {
        match self.read_record() {
            Ok(record) => record,
            Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => StoredAuth::default(),
            Err(e) => {
                log::warn!("ignoring unreadable auth record at {}: {e}", self.path.display());
                StoredAuth::default()
            }
        }
    }

    fn store(&self, partial: &StoredAuth) {
        let mut record = self.load();
        record.merge(partial);
        if let Err(e) = self.write_record(&record) {
            log::warn!("failed to persist auth record to {}: {e}", self.path.display());
        }
    }
}
