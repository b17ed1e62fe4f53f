//! Array condensation: squeeze holes out of restored sequences.

use super::node::Projection;

/// Remove every hole from every sequence in `dest`, recursively, so that
/// remaining elements become contiguous from index 0 in their original
/// order. Mutates `dest` in place.
///
/// An element explicitly holding null is a real element, not a hole, and
/// survives. Leaves are cloned source values; `serde_json` arrays are
/// dense, so there is nothing to enumerate past a leaf.
pub fn condense_arrays(dest: &mut Projection) {
    match dest {
        Projection::Seq(slots) => {
            slots.retain(Option::is_some);
            for slot in slots.iter_mut() {
                if let Some(child) = slot {
                    condense_arrays(child);
                }
            }
        }
        Projection::Map(entries) => {
            for child in entries.values_mut() {
                condense_arrays(child);
            }
        }
        Projection::Leaf(_) => {}
    }
}
