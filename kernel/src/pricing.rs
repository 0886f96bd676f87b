//! Session pricing.
//!
//! Sessions are billed at a flat hourly rate regardless of which games were
//! picked; snacks are added per unit. The total is recomputed from the whole
//! draft on every call so it can never drift from the form state.

use crate::model::{booking::BookingDraft, snack::Snack};

/// Computes the total price of a draft in the smallest currency unit.
///
/// Only `duration` and `snacks` are read. Snack entries with quantity 0 or
/// with an id missing from the catalog contribute nothing; a missing id is
/// not an error here, the catalog lookup endpoints are where "not found"
/// surfaces. Deterministic and side-effect free, safe to call per keystroke.
pub fn total(draft: &BookingDraft, snack_catalog: &[Snack], hourly_rate: u32) -> u64 {
    let session = u64::from(hourly_rate) * u64::from(draft.duration);

    let snacks: u64 = draft
        .snacks
        .iter()
        .filter(|(_, qty)| **qty > 0)
        .filter_map(|(id, qty)| {
            snack_catalog
                .iter()
                .find(|s| &s.id == id)
                .map(|s| u64::from(s.price) * u64::from(*qty))
        })
        .sum();

    session + snacks
}

/// Snack charges alone, shown as a separate line in the price summary.
pub fn snacks_subtotal(draft: &BookingDraft, snack_catalog: &[Snack]) -> u64 {
    total(draft, snack_catalog, 0)
}
