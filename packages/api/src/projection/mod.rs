//! Projection of arranged property paths into a partial structure.
//!
//! The projector builds indexed-mapping nodes uniformly; the optional
//! post-passes retag mappings into native sequences where the source held
//! arrays ([`restore_arrays`]) and squeeze holes out of those sequences
//! ([`condense_arrays`]).

mod condense;
mod node;
mod options;
mod projector;
mod restore;

pub use condense::condense_arrays;
pub use node::Projection;
pub use options::{ArrayOptions, MapOptions, PropertyInfo, Transform};
pub use projector::{map_paths_to_object, map_paths_to_object_with};
pub use restore::restore_arrays;
