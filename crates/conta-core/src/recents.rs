//! Recently opened references
//!
//! The counting screen shows the references the operator opened last,
//! most recent first. The list is one JSON blob under the
//! `recentReferences` storage key; re-opening a reference moves it to
//! the front instead of duplicating it.

use std::sync::Arc;

use conta_domain::Reference;

use crate::storage::{self, KeyValueStore};

/// Storage key for the serialized recent-reference list.
pub const RECENTS_KEY: &str = "recentReferences";

/// Persisted most-recent-first reference history.
pub struct RecentReferences {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<Reference>,
}

impl RecentReferences {
    /// Load the history. Missing or corrupt blobs load as empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = storage::read_json_or_default(store.as_ref(), RECENTS_KEY);
        Self { store, entries }
    }

    /// Record a reference as just opened: deduplicate by identifier and
    /// move it to the front.
    pub fn record(&mut self, reference: Reference) {
        self.entries.retain(|r| r.reference != reference.reference);
        self.entries.insert(0, reference);
        self.persist();
    }

    /// The history, most recent first.
    pub fn list(&self) -> &[Reference] {
        &self.entries
    }

    /// Forget the whole history, in memory and in storage.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(RECENTS_KEY) {
            tracing::warn!("Failed to clear {}: {}", RECENTS_KEY, e);
        }
    }

    fn persist(&self) {
        if let Err(e) = storage::write_json(self.store.as_ref(), RECENTS_KEY, &self.entries) {
            tracing::warn!("Failed to persist {}: {}", RECENTS_KEY, e);
        }
    }
}
