//! The projection entry points.

use indexmap::IndexMap;
use pathmap_property::get_property;
use serde_json::Value;

use crate::paths::{arrange_property_paths, to_dot_path};

use super::condense::condense_arrays;
use super::node::Projection;
use super::options::{MapOptions, PropertyInfo};
use super::restore::restore_arrays;

/// Pull property-path values from `source` and compile them into a partial
/// structure with the same nesting, using default options.
///
/// Paths that do not resolve are omitted silently. Indexed positions come
/// back as indexed mappings; see
/// [`MapOptions::preserve_arrays`](super::MapOptions::preserve_arrays) for
/// native sequences.
pub fn map_paths_to_object<I, S>(source: &Value, property_paths: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    map_paths_to_object_with(source, property_paths, MapOptions::new())
}

/// Same as [`map_paths_to_object`] with explicit options. A bare transform
/// closure is accepted in place of the options struct.
pub fn map_paths_to_object_with<I, S>(
    source: &Value,
    property_paths: I,
    options: impl Into<MapOptions>,
) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = options.into();
    let dot_paths: Vec<String> = property_paths
        .into_iter()
        .map(|path| to_dot_path(path.as_ref()))
        .collect();
    let arranged = arrange_property_paths(&dot_paths);
    tracing::debug!(
        requested = dot_paths.len(),
        arranged = arranged.len(),
        "projecting property paths"
    );

    let mut root: IndexMap<String, Projection> = IndexMap::new();
    for path in &arranged {
        let lookup = get_property(source, path);
        let Some(value) = lookup.value else {
            tracing::trace!(path = %path, "skipping unresolved path");
            continue;
        };
        let info = PropertyInfo {
            exists: lookup.exists,
            value: Some(value),
            path: path.as_str(),
        };
        let leaf = options.apply(&info);
        write_path(&mut root, path, leaf);
    }

    let mut dest = Projection::Map(root);
    if options.arrays.preserve {
        restore_arrays(source, &mut dest);
        if !options.arrays.sparse {
            condense_arrays(&mut dest);
        }
    }
    dest
}

/// Create intermediate mapping nodes along `path` and set the final token.
fn write_path(root: &mut IndexMap<String, Projection>, path: &str, value: Value) {
    let tokens: Vec<&str> = path.split('.').collect();
    let Some((last, ancestors)) = tokens.split_last() else {
        return;
    };
    let mut node = root;
    for token in ancestors {
        node = node
            .entry((*token).to_owned())
            .or_insert_with(Projection::empty_map)
            .map_slot();
    }
    node.insert((*last).to_owned(), Projection::Leaf(value));
}
