//! The tally store: load, mutate, persist

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::StorageError;
use crate::storage::{self, KeyValueStore};

use super::types::{QuantityMap, Step, TargetMap, QUANTITIES_KEY, TARGETS_KEY};

/// Owns the accumulated-quantity and target-quantity maps for the
/// currently open counting view.
///
/// One instance exists per open view; it is constructed by loading both
/// blobs from storage and holds the authoritative state in memory from
/// then on. Persistence is write-through and best-effort: a failed
/// write is logged and superseded by the next mutation's write, never
/// surfaced to the caller.
pub struct TallyStore {
    store: Arc<dyn KeyValueStore>,
    quantities: QuantityMap,
    targets: TargetMap,
}

impl TallyStore {
    /// Load both maps from storage. Absent keys yield empty maps; a
    /// corrupt blob is logged and likewise yields an empty map.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let quantities = storage::read_json_or_default(store.as_ref(), QUANTITIES_KEY);
        let targets = storage::read_json_or_default(store.as_ref(), TARGETS_KEY);
        Self {
            store,
            quantities,
            targets,
        }
    }

    /// Apply one signed step of `unit_quantity` to a counter and return
    /// the new accumulated quantity. The entry is created on first use;
    /// decrements clamp at zero. The full quantity map is written back
    /// immediately (best-effort).
    pub fn adjust(
        &mut self,
        reference: &str,
        material: &str,
        step: Step,
        unit_quantity: u32,
    ) -> u64 {
        let per_reference = self.quantities.entry(reference.to_string()).or_default();
        let slot = per_reference.entry(material.to_string()).or_insert(0);
        *slot = step.apply(*slot, unit_quantity);
        let updated = *slot;

        self.persist_quantities();
        updated
    }

    /// Current accumulated quantity for a counter. Absent entries read
    /// as zero.
    pub fn quantity(&self, reference: &str, material: &str) -> u64 {
        self.quantities
            .get(reference)
            .and_then(|m| m.get(material))
            .copied()
            .unwrap_or(0)
    }

    /// All counters for one reference, by material name.
    pub fn quantities_for(&self, reference: &str) -> HashMap<String, u64> {
        self.quantities.get(reference).cloned().unwrap_or_default()
    }

    /// Store the target-quantity text verbatim. No numeric validation;
    /// the value is persisted on the next flush.
    pub fn set_target(&mut self, reference: &str, value: impl Into<String>) {
        self.targets.insert(reference.to_string(), value.into());
    }

    /// The raw target-quantity text for a reference, if any.
    pub fn target(&self, reference: &str) -> Option<&str> {
        self.targets.get(reference).map(String::as_str)
    }

    /// Drop every counter and the target for one reference, leaving
    /// other references untouched, and persist both maps immediately.
    pub fn reset(&mut self, reference: &str) {
        self.quantities.remove(reference);
        self.targets.remove(reference);

        self.persist_quantities();
        self.persist_targets();
    }

    /// Write both maps to storage. Safe to call redundantly; always
    /// serializes the current in-memory state.
    pub fn flush(&self) -> Result<(), StorageError> {
        storage::write_json(self.store.as_ref(), QUANTITIES_KEY, &self.quantities)?;
        storage::write_json(self.store.as_ref(), TARGETS_KEY, &self.targets)?;
        Ok(())
    }

    fn persist_quantities(&self) {
        if let Err(e) = storage::write_json(self.store.as_ref(), QUANTITIES_KEY, &self.quantities)
        {
            tracing::warn!("Failed to persist {}: {}", QUANTITIES_KEY, e);
        }
    }

    fn persist_targets(&self) {
        if let Err(e) = storage::write_json(self.store.as_ref(), TARGETS_KEY, &self.targets) {
            tracing::warn!("Failed to persist {}: {}", TARGETS_KEY, e);
        }
    }
}
