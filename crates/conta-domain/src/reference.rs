//! Reference (product variant) model

use serde::{Deserialize, Serialize};

use crate::material::Material;

/// A product variant tracked on a production line, with its
/// bill of materials.
///
/// The `reference` string is the identifier the whole app keys on:
/// tallies, targets, and recent history all use it. It is unique
/// within a production line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Reference {
    /// Reference identifier (e.g. "J6276207").
    pub reference: String,
    /// Owning production line tag (e.g. "COMAS 1").
    #[serde(default)]
    pub line: String,
    /// Ordered bill of materials.
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl Reference {
    pub fn new(reference: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            line: line.into(),
            materials: Vec::new(),
        }
    }

    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = materials;
        self
    }

    /// Look up a material row by display name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Case-insensitive substring match against the reference identifier,
    /// as used by the counting screen's search box.
    pub fn matches_query(&self, query: &str) -> bool {
        self.reference.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reference {
        Reference::new("J6276207", "COMAS 1").with_materials(vec![
            Material::new("Carcasa", "MAT-1001", 1),
            Material::new("Tornillo M6", "MAT-0042", 4),
        ])
    }

    #[test]
    fn material_lookup_by_name() {
        let r = sample();
        assert_eq!(r.material("Tornillo M6").unwrap().quantity, 4);
        assert!(r.material("Arandela").is_none());
    }

    #[test]
    fn query_match_is_case_insensitive() {
        let r = sample();
        assert!(r.matches_query("j627"));
        assert!(r.matches_query("6207"));
        assert!(!r.matches_query("K9"));
    }

    #[test]
    fn missing_wire_fields_default() {
        // Catalog documents occasionally omit line/materials; both default.
        let r: Reference = serde_json::from_str(r#"{"reference":"J1"}"#).unwrap();
        assert_eq!(r.reference, "J1");
        assert!(r.line.is_empty());
        assert!(r.materials.is_empty());
    }
}
