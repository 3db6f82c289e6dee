//! Persistence module
//!
//! File-based JSON snapshots of the address book.

pub mod snapshot;

pub use snapshot::{PersistenceError, SnapshotStore};
