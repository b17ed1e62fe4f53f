//! Array restoration: retag indexed mappings into native sequences.

use serde_json::Value;

use super::node::Projection;

/// Restore native sequences in `dest` wherever the corresponding `source`
/// node is an array. Mutates `dest` in place, recursively.
///
/// Entries are copied to their integer keys; indices nothing was projected
/// at stay holes. Destination keys the source lacks are left untouched and
/// recursion stops at that branch. The destination root itself is never
/// retagged. This pass never adds or removes values, it only reclassifies
/// container shape.
pub fn restore_arrays(source: &Value, dest: &mut Projection) {
    match dest {
        Projection::Map(entries) => {
            for (key, child) in entries.iter_mut() {
                if let Some(source_child) = child_of(source, key) {
                    restore_child(source_child, child);
                }
            }
        }
        Projection::Seq(slots) => {
            for (index, slot) in slots.iter_mut().enumerate() {
                let Some(child) = slot.as_mut() else { continue };
                if let Some(source_child) = source.get(index) {
                    restore_child(source_child, child);
                }
            }
        }
        Projection::Leaf(_) => {}
    }
}

fn restore_child(source: &Value, dest: &mut Projection) {
    if source.is_array() {
        if let Projection::Map(entries) = dest {
            let mut slots: Vec<Option<Projection>> = Vec::new();
            for (key, child) in entries.drain(..) {
                let Ok(index) = key.trim().parse::<usize>() else {
                    continue;
                };
                if slots.len() <= index {
                    slots.resize_with(index + 1, || None);
                }
                slots[index] = Some(child);
            }
            *dest = Projection::Seq(slots);
        }
    }
    restore_arrays(source, dest);
}

/// Source child at a member name or index token.
fn child_of<'v>(source: &'v Value, key: &str) -> Option<&'v Value> {
    match source {
        Value::Object(members) => members.get(key),
        Value::Array(items) => key
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}
