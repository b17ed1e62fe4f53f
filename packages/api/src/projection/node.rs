//! The partial-structure node type.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// A partial copy of a source structure.
///
/// The projector builds `Map` nodes for every container position; only the
/// array-restoration pass introduces `Seq` nodes, and only where the source
/// held a native array. A `Seq` keeps a hole (`None`) distinct from an
/// explicit null element (`Some(Projection::Leaf(Value::Null))`); both stay
/// representable at once, which the condensation pass relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Indexed mapping of member names or stringified indices to children.
    Map(IndexMap<String, Projection>),
    /// Native sequence; `None` slots are holes.
    Seq(Vec<Option<Projection>>),
    /// A value copied (and possibly transformed) out of the source.
    Leaf(Value),
}

impl Projection {
    pub(crate) fn empty_map() -> Self {
        Projection::Map(IndexMap::new())
    }

    /// Child at a member name or stringified index.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Projection> {
        match self {
            Projection::Map(entries) => entries.get(key),
            Projection::Seq(slots) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| slots.get(index))
                .and_then(Option::as_ref),
            Projection::Leaf(_) => None,
        }
    }

    /// Child at a sequence index. Holes and out-of-bounds are both `None`.
    #[must_use]
    pub fn index(&self, index: usize) -> Option<&Projection> {
        match self {
            Projection::Seq(slots) => slots.get(index).and_then(Option::as_ref),
            Projection::Map(entries) => entries.get(index.to_string().as_str()),
            Projection::Leaf(_) => None,
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Projection::Leaf(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Projection::Map(entries) => entries.is_empty(),
            Projection::Seq(slots) => slots.is_empty(),
            Projection::Leaf(_) => false,
        }
    }

    /// Collapse into a plain JSON value. Holes become `null`, the same
    /// information loss JSON serialization of a sparse array incurs.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Projection::Leaf(value) => value,
            Projection::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, child.into_value()))
                    .collect(),
            ),
            Projection::Seq(slots) => Value::Array(
                slots
                    .into_iter()
                    .map(|slot| slot.map_or(Value::Null, Projection::into_value))
                    .collect(),
            ),
        }
    }

    /// Mutable access to the mapping entries. Arranged paths never nest,
    /// so any non-map occupant is replaced.
    pub(crate) fn map_slot(&mut self) -> &mut IndexMap<String, Projection> {
        if !matches!(self, Projection::Map(_)) {
            *self = Projection::empty_map();
        }
        match self {
            Projection::Map(entries) => entries,
            _ => unreachable!("map_slot just reset the variant"),
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::empty_map()
    }
}

impl From<Projection> for Value {
    fn from(projection: Projection) -> Self {
        projection.into_value()
    }
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Projection::Leaf(value) => value.serialize(serializer),
            Projection::Map(entries) => {
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    state.serialize_entry(key, child)?;
                }
                state.end()
            }
            Projection::Seq(slots) => {
                let mut state = serializer.serialize_seq(Some(slots.len()))?;
                for slot in slots {
                    match slot {
                        Some(child) => state.serialize_element(child)?,
                        None => state.serialize_element(&Value::Null)?,
                    }
                }
                state.end()
            }
        }
    }
}
