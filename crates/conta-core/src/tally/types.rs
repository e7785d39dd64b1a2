//! Tally map shapes and the adjustment step

use std::collections::HashMap;

/// Storage key for the accumulated-quantity map:
/// `{ [referenceId]: { [materialName]: integer } }`.
pub const QUANTITIES_KEY: &str = "materialQuantities";

/// Storage key for the target-quantity map:
/// `{ [referenceId]: string }`.
pub const TARGETS_KEY: &str = "cantidadARealizar";

/// Accumulated quantities, keyed by reference id then material name.
pub(crate) type QuantityMap = HashMap<String, HashMap<String, u64>>;

/// Target quantities ("units to produce"), keyed by reference id.
/// Values are the user's raw text, stored verbatim.
pub(crate) type TargetMap = HashMap<String, String>;

/// Direction of a counter adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Step {
    Increment,
    Decrement,
}

impl Step {
    /// Apply one step of `unit_quantity` to an accumulated count.
    /// Decrements clamp at zero rather than wrapping.
    pub fn apply(self, current: u64, unit_quantity: u32) -> u64 {
        match self {
            Step::Increment => current.saturating_add(u64::from(unit_quantity)),
            Step::Decrement => current.saturating_sub(u64::from(unit_quantity)),
        }
    }
}
