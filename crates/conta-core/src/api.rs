//! Unified store API for the mobile shell
//!
//! [`ContaStore`] is the single object a shell constructs and keeps for
//! the lifetime of a screen session. It owns the tally, notes, and
//! recent-reference stores plus the catalog, and is the boundary where
//! failures degrade: catalog problems become empty lists, persistence
//! problems become WARN logs. Nothing here panics or blocks the UI.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use conta_domain::{Material, Note, Reference};

use crate::catalog::{BundledCatalog, ReferenceCatalog};
use crate::config::StoreConfig;
use crate::error::ContaError;
use crate::notes::NoteStore;
use crate::recents::RecentReferences;
use crate::storage::KeyValueStore;
use crate::tally::{Step, TallyStore};

#[cfg(feature = "native")]
use crate::catalog::RemoteCatalog;

/// The FFI entry point. One instance per shell session; internally
/// synchronized so it can cross the FFI boundary as `Send + Sync`.
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct ContaStore {
    catalog: Box<dyn ReferenceCatalog>,
    #[cfg(feature = "native")]
    remote: RemoteCatalog,
    tally: Mutex<TallyStore>,
    notes: Mutex<NoteStore>,
    recents: Mutex<RecentReferences>,
}

impl ContaStore {
    /// Build a store over any substrate and catalog. The non-FFI seam
    /// used by the public constructors and by tests.
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        catalog: Box<dyn ReferenceCatalog>,
        config: StoreConfig,
    ) -> Self {
        #[cfg(not(feature = "native"))]
        let _ = &config;
        Self {
            catalog,
            #[cfg(feature = "native")]
            remote: RemoteCatalog::new(&config.catalog),
            tally: Mutex::new(TallyStore::load(store.clone())),
            notes: Mutex::new(NoteStore::load(store.clone())),
            recents: Mutex::new(RecentReferences::load(store)),
        }
    }

    // A poisoned lock only means an earlier caller panicked mid-call;
    // the maps it guards are still the best state available.
    fn tally_guard(&self) -> MutexGuard<'_, TallyStore> {
        self.tally.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn notes_guard(&self) -> MutexGuard<'_, NoteStore> {
        self.notes.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn recents_guard(&self) -> MutexGuard<'_, RecentReferences> {
        self.recents.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl ContaStore {
    /// Open or create a store over a SQLite database at the given path.
    #[cfg(feature = "sqlite")]
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn open(path: String) -> Result<Arc<Self>, ContaError> {
        Self::open_with_config(path, StoreConfig::default())
    }

    /// Open with explicit configuration (remote endpoint, timeouts).
    #[cfg(feature = "sqlite")]
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn open_with_config(path: String, config: StoreConfig) -> Result<Arc<Self>, ContaError> {
        let store = Arc::new(crate::storage::SqliteStore::open(&path)?);
        Ok(Arc::new(Self::with_parts(
            store,
            Box::new(BundledCatalog::builtin()),
            config,
        )))
    }

    /// Open over an in-memory substrate (for testing and previews).
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn open_in_memory() -> Result<Arc<Self>, ContaError> {
        let store = Arc::new(crate::storage::MemoryStore::new());
        Ok(Arc::new(Self::with_parts(
            store,
            Box::new(BundledCatalog::builtin()),
            StoreConfig::default(),
        )))
    }

    // --- Catalog ---

    /// Known production lines, in display order.
    pub fn lines(&self) -> Vec<String> {
        self.catalog.lines()
    }

    /// References on one line. Unknown lines are empty, never an error.
    pub fn references(&self, line: String) -> Vec<Reference> {
        self.catalog.all_references(&line)
    }

    /// Bill of materials for one reference on one line.
    pub fn materials_for(&self, line: String, reference: String) -> Vec<Material> {
        self.catalog.materials_for(&line, &reference)
    }

    /// Search reference identifiers across all lines.
    pub fn search_references(&self, query: String) -> Vec<Reference> {
        self.catalog.search(&query)
    }

    // --- Recent references ---

    /// Record that the operator opened a reference. Unknown references
    /// are ignored with a WARN (the history only ever holds real ones).
    pub fn record_recent(&self, line: String, reference: String) {
        match self
            .catalog
            .all_references(&line)
            .into_iter()
            .find(|r| r.reference == reference)
        {
            Some(found) => self.recents_guard().record(found),
            None => {
                tracing::warn!("Not recording unknown reference {} on {}", reference, line);
            }
        }
    }

    /// The history, most recent first.
    pub fn recent_references(&self) -> Vec<Reference> {
        self.recents_guard().list().to_vec()
    }

    /// Forget the history.
    pub fn clear_recent_references(&self) {
        self.recents_guard().clear();
    }

    // --- Tally counters ---

    /// Apply one step of `unit_quantity` to a counter and return the
    /// new accumulated quantity (clamped at zero).
    pub fn adjust_quantity(
        &self,
        reference: String,
        material: String,
        step: Step,
        unit_quantity: u32,
    ) -> u64 {
        self.tally_guard().adjust(&reference, &material, step, unit_quantity)
    }

    /// Current accumulated quantity for one counter.
    pub fn quantity(&self, reference: String, material: String) -> u64 {
        self.tally_guard().quantity(&reference, &material)
    }

    /// All counters for one reference, by material name.
    pub fn quantities_for(&self, reference: String) -> HashMap<String, u64> {
        self.tally_guard().quantities_for(&reference)
    }

    /// Store the target-quantity text verbatim.
    pub fn set_target_quantity(&self, reference: String, value: String) {
        self.tally_guard().set_target(&reference, value);
    }

    /// The target-quantity text, or empty if never set.
    pub fn target_quantity(&self, reference: String) -> String {
        self.tally_guard().target(&reference).unwrap_or_default().to_string()
    }

    /// Drop every counter and the target for one reference and persist
    /// immediately.
    pub fn reset_reference(&self, reference: String) {
        self.tally_guard().reset(&reference);
    }

    /// Write the tally maps to storage (called when the counting view
    /// closes). Redundant calls are harmless; failures are logged and
    /// superseded by the next write.
    pub fn flush(&self) {
        if let Err(e) = self.tally_guard().flush() {
            tracing::warn!("Failed to flush tally state: {}", e);
        }
    }

    // --- Notes ---

    /// All notes, in insertion order.
    pub fn notes(&self) -> Vec<Note> {
        self.notes_guard().list().to_vec()
    }

    /// Append a note. Blank text is rejected.
    pub fn add_note(&self, text: String) -> Result<Note, ContaError> {
        Ok(self.notes_guard().add(&text)?)
    }

    /// Replace a note's text.
    pub fn edit_note(&self, id: String, text: String) -> Result<(), ContaError> {
        Ok(self.notes_guard().edit(&id, &text)?)
    }

    /// Flip a note's completion flag. Returns false for unknown ids.
    pub fn toggle_note(&self, id: String) -> bool {
        self.notes_guard().toggle(&id)
    }

    /// Delete a note. Returns false for unknown ids.
    pub fn remove_note(&self, id: String) -> bool {
        self.notes_guard().remove(&id)
    }

    /// Delete every note.
    pub fn clear_notes(&self) {
        self.notes_guard().clear();
    }
}

#[cfg(feature = "native")]
#[cfg_attr(feature = "uniffi", uniffi::export(async_runtime = "tokio"))]
impl ContaStore {
    /// Fetch one line's references from the remote document store.
    /// Failures degrade to an empty list with a WARN; the shell shows
    /// its passive "no references" notice and stays responsive.
    pub async fn fetch_remote_references(&self, line: String) -> Vec<Reference> {
        match self.remote.fetch_line(&line).await {
            Ok(references) => references,
            Err(e) => {
                tracing::warn!("Remote catalog fetch for {} failed: {}", line, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn memory_parts() -> (Arc<MemoryStore>, ContaStore) {
        let substrate = Arc::new(MemoryStore::new());
        let store = ContaStore::with_parts(
            substrate.clone(),
            Box::new(BundledCatalog::builtin()),
            StoreConfig::default(),
        );
        (substrate, store)
    }

    #[test]
    fn counting_flow_end_to_end() {
        let (_, store) = memory_parts();

        let lines = store.lines();
        assert!(lines.contains(&"COMAS 1".to_string()));

        let references = store.references("COMAS 1".into());
        let reference = references[0].reference.clone();
        let materials = store.materials_for("COMAS 1".into(), reference.clone());
        let material = materials[0].clone();

        let q = store.adjust_quantity(
            reference.clone(),
            material.name.clone(),
            Step::Increment,
            material.quantity,
        );
        assert_eq!(q, u64::from(material.quantity));

        store.set_target_quantity(reference.clone(), "120".into());
        store.flush();

        assert_eq!(store.target_quantity(reference.clone()), "120");
        assert_eq!(store.quantity(reference.clone(), material.name.clone()), q);

        store.reset_reference(reference.clone());
        assert_eq!(store.quantity(reference.clone(), material.name), 0);
        assert_eq!(store.target_quantity(reference), "");
    }

    #[test]
    fn state_survives_a_new_session_over_the_same_substrate() {
        let (substrate, store) = memory_parts();
        store.adjust_quantity("J6276207".into(), "Tornillo M6".into(), Step::Increment, 4);
        store.set_target_quantity("J6276207".into(), "50".into());
        store.flush();
        drop(store);

        let next = ContaStore::with_parts(
            substrate,
            Box::new(BundledCatalog::builtin()),
            StoreConfig::default(),
        );
        assert_eq!(next.quantity("J6276207".into(), "Tornillo M6".into()), 4);
        assert_eq!(next.target_quantity("J6276207".into()), "50");
    }

    #[test]
    fn unknown_catalog_lookups_are_empty() {
        let (_, store) = memory_parts();
        assert!(store.references("COMAS 9".into()).is_empty());
        assert!(store
            .materials_for("COMAS 1".into(), "NOPE".into())
            .is_empty());
        assert!(store.search_references("zzzz".into()).is_empty());
    }

    #[test]
    fn recents_only_hold_known_references() {
        let (_, store) = memory_parts();
        store.record_recent("COMAS 1".into(), "J6276207".into());
        store.record_recent("COMAS 1".into(), "NOPE".into());

        let recents = store.recent_references();
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].reference, "J6276207");

        store.clear_recent_references();
        assert!(store.recent_references().is_empty());
    }

    #[test]
    fn notes_round_trip_through_the_api() {
        let (_, store) = memory_parts();
        let note = store.add_note("pedir tornillos".into()).unwrap();
        assert!(store.add_note("  ".into()).is_err());

        assert!(store.toggle_note(note.id.clone()));
        assert!(store.notes()[0].completed);

        store.edit_note(note.id.clone(), "pedir clips".into()).unwrap();
        assert_eq!(store.notes()[0].text, "pedir clips");

        assert!(store.remove_note(note.id));
        assert!(store.notes().is_empty());
    }
}
