//! Infrastructure layer - storage, configuration, and demo data
//!
//! Everything that touches the world outside the domain: the snapshot
//! file, the configuration sources, the random generator behind the
//! demo command.

pub mod config;
pub mod demo;
pub mod persistence;

pub use config::{AppConfig, StorageConfig};
pub use demo::generate_demo_contacts;
pub use persistence::{PersistenceError, SnapshotStore};
