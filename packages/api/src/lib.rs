//! Sparse structural projection of JSON values by property path.
//!
//! Given a list of dot- and bracket-indexed property paths (`"a.b[2].c"`),
//! this crate curates the minimal covering path set and copies only the
//! values reachable at those paths out of a source [`serde_json::Value`]
//! into a new structure with the same nesting.
//!
//! Intermediate nodes are built as indexed mappings regardless of the
//! source's container kind; opting into array preservation retags them
//! back into native sequences, with or without holes.
//!
//! # Examples
//!
//! ```
//! use pathmap::map_paths_to_object;
//! use serde_json::json;
//!
//! let source = json!({ "a": { "b": [10, 20] }, "c": 3 });
//! let partial = map_paths_to_object(&source, ["a.b[1]"]);
//! assert_eq!(
//!     serde_json::Value::from(partial),
//!     json!({ "a": { "b": { "1": 20 } } }),
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod paths;
pub mod projection;

pub use paths::{
    arrange_property_paths, parse_property_path, to_dot_path, PathSyntaxError, PathToken,
};
pub use projection::{
    condense_arrays, map_paths_to_object, map_paths_to_object_with, restore_arrays, ArrayOptions,
    MapOptions, Projection, PropertyInfo, Transform,
};

// Re-export the lookup primitive consumed by the projector
pub use pathmap_property::{get_property, Lookup};
