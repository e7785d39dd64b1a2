//! Reference catalog
//!
//! Read-only supplier of production lines, references, and their bills
//! of materials. Two implementations mirror the app's two data paths: a
//! dataset bundled into the binary, and an async client for the remote
//! document store. The catalog never blocks counting: a failed fetch
//! degrades to an empty list at the API boundary.

mod bundled;
#[cfg(feature = "native")]
mod remote;

pub use bundled::BundledCatalog;
#[cfg(feature = "native")]
pub use remote::RemoteCatalog;

use conta_domain::{Material, Reference};

/// The read contract consumed by the counting and browsing screens.
pub trait ReferenceCatalog: Send + Sync {
    /// Known production line tags, in display order.
    fn lines(&self) -> Vec<String>;

    /// Every reference on one production line. Unknown lines yield an
    /// empty sequence, never an error.
    fn all_references(&self, line: &str) -> Vec<Reference>;

    /// The ordered bill of materials for one reference on one line.
    /// Unknown pairs yield an empty sequence.
    fn materials_for(&self, line: &str, reference: &str) -> Vec<Material> {
        self.all_references(line)
            .into_iter()
            .find(|r| r.reference == reference)
            .map(|r| r.materials)
            .unwrap_or_default()
    }

    /// Case-insensitive substring search over reference identifiers,
    /// across every line.
    fn search(&self, query: &str) -> Vec<Reference> {
        self.lines()
            .iter()
            .flat_map(|line| self.all_references(line))
            .filter(|r| r.matches_query(query))
            .collect()
    }
}
