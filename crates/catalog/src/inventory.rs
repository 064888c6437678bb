use crate::record::{RawProductRecord, coerce_number};

/// Upstream fields that may carry the on-hand quantity, highest priority first.
pub const INVENTORY_CANDIDATES: [&str; 6] = [
    "inventoryCount",
    "stock",
    "quantity",
    "availableQuantity",
    "inventory.available",
    "inventory.availableUnits",
];

/// Resolve the canonical inventory count of a raw record.
///
/// The first candidate that is present and not `null` wins, even if it fails to
/// coerce; a failed coercion yields `0` rather than falling through. Fractional
/// and negative values are kept as-is.
pub fn compute_inventory_count(raw: &RawProductRecord) -> f64 {
    INVENTORY_CANDIDATES
        .iter()
        .find_map(|path| raw.get_present(path))
        .and_then(coerce_number)
        .unwrap_or(0.0)
}
