//! Catalog over the dataset bundled into the binary

use std::collections::BTreeMap;

use conta_domain::Reference;

use crate::error::CatalogError;

use super::ReferenceCatalog;

/// The reference dataset shipped with the app, grouped by production
/// line. Used when the remote store is unreachable and for the counting
/// screens, which never wait on the network.
#[derive(Debug)]
pub struct BundledCatalog {
    by_line: BTreeMap<String, Vec<Reference>>,
}

impl BundledCatalog {
    /// Parse a catalog from its JSON form:
    /// `{ [lineId]: [ {reference, materials: [...]}, ... ] }`.
    ///
    /// Each parsed reference is stamped with the line it was grouped
    /// under, so documents may omit their `line` field.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut by_line: BTreeMap<String, Vec<Reference>> = serde_json::from_str(json)?;
        for (line, references) in by_line.iter_mut() {
            for reference in references.iter_mut() {
                reference.line = line.clone();
            }
        }
        Ok(Self { by_line })
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../../data/references.json"))
            .expect("embedded references dataset is valid JSON")
    }
}

impl ReferenceCatalog for BundledCatalog {
    fn lines(&self) -> Vec<String> {
        self.by_line.keys().cloned().collect()
    }

    fn all_references(&self, line: &str) -> Vec<Reference> {
        self.by_line.get(line).cloned().unwrap_or_default()
    }
}
