//! Dot-path property lookup over JSON values.
//!
//! Resolves a normalized dot-path (e.g. `"a.b.2.c"`) against a
//! [`serde_json::Value`] and reports whether a concrete value exists there.
//! An entry holding JSON `null` is an existing value; only an absent entry
//! is a miss. That distinction is load-bearing for callers that project
//! sparse structures.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod lookup;

pub use lookup::{get_property, Lookup};
