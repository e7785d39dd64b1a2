//! conta-core: Cross-platform core library for the conta counting app
//!
//! This library owns everything the mobile shell persists and queries:
//! - Local key-value storage (SQLite-backed) for on-device state
//! - Material tally counters and per-reference target quantities
//! - The notes list and recent-reference history
//! - The reference catalog (bundled dataset + remote document store)
//!
//! The shell renders screens and calls in through UniFFI bindings; all
//! state transitions and failure handling live here. Persistence
//! failures never surface as blocking errors — in-memory state stays
//! authoritative and degraded reads start empty.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notes;
pub mod recents;
pub mod storage;
pub mod tally;

#[cfg(feature = "native")]
pub mod http;

pub use api::ContaStore;
pub use catalog::{BundledCatalog, ReferenceCatalog};
#[cfg(feature = "native")]
pub use catalog::RemoteCatalog;
pub use config::{CatalogConfig, StoreConfig};
pub use error::{CatalogError, ContaError, NotesError, Result, StorageError};
pub use notes::NoteStore;
pub use recents::RecentReferences;
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(feature = "sqlite")]
pub use storage::SqliteStore;
pub use tally::{Step, TallyStore, QUANTITIES_KEY, TARGETS_KEY};

// Re-export the domain types shells consume alongside the store.
pub use conta_domain::{Material, Note, Reference};

// Setup UniFFI - use proc macros only, no UDL file
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// Returns the version of conta-core
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
