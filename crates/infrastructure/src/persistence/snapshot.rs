//! File-based address book snapshot store
//!
//! The whole book is one JSON document: loaded once when a session starts,
//! written once when it ends. A missing file is not an error, it just means
//! a fresh book.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use domain::entities::AddressBook;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by snapshot persistence
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem access failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot content could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Stores the address book as a JSON file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given snapshot file, creating its parent
    /// directory if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { path })
    }

    /// Path of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole book to disk
    pub fn save(&self, book: &AddressBook) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(book)?;
        fs::write(&self.path, json)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book snapshot"
        );
        Ok(())
    }

    /// Read the book back; `None` when no snapshot exists yet
    pub fn load(&self) -> Result<Option<AddressBook>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book snapshot"
        );
        Ok(Some(book))
    }
}
