//! Material tally counters
//!
//! The counting screen's backing state: per (reference, material)
//! accumulated quantities and the per-reference target quantity. Both
//! maps live in memory while a counting view is open and are written
//! back wholesale to local storage — the full current map, never a
//! snapshot, so overlapping writes cannot lose an update.

mod store;
mod types;

pub use store::TallyStore;
pub use types::{Step, QUANTITIES_KEY, TARGETS_KEY};
