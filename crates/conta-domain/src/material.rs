//! Material (bill-of-materials component) model

use serde::{Deserialize, Serialize};

/// One component consumed to build a unit of a reference.
///
/// Field names follow the catalog document format:
/// `{name, material_reference, quantity}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Material {
    /// Display name shown on the counting rows.
    pub name: String,
    /// Internal material reference code.
    pub material_reference: String,
    /// Units consumed per assembled piece. Always positive.
    pub quantity: u32,
}

impl Material {
    pub fn new(name: impl Into<String>, material_reference: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            material_reference: material_reference.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_json_uses_wire_field_names() {
        let m = Material::new("Tornillo M6", "MAT-0042", 4);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"material_reference\":\"MAT-0042\""));

        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
