//! Path arrangement: collapse a path list to its minimal ancestor set.

use indexmap::IndexMap;

use super::tokens::tokenize;

/// Curate the most inclusive property paths from a list.
///
/// A retained path is never an ancestor or descendant of another retained
/// path, exact duplicates collapse to the first occurrence, and every
/// survivor keeps the position of its own first occurrence.
///
/// # Examples
///
/// ```
/// use pathmap::arrange_property_paths;
///
/// let arranged = arrange_property_paths(["a.b.c.d", "a.b", "a.b.z[4].w", "s.t"]);
/// assert_eq!(arranged, ["a.b", "s.t"]);
/// ```
///
/// `"a.b"` is inclusive of `"a.b.c.d"` and `"a.b.z[4].w"`: both are subsets
/// of `"a.b"` but not vice versa.
pub fn arrange_property_paths<I, S>(property_paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kept: IndexMap<String, Vec<String>> = IndexMap::new();
    'candidates: for path in property_paths {
        let path = path.as_ref();
        let tokens = tokenize(path);
        let mut subsumed: Vec<String> = Vec::new();
        for (kept_path, kept_tokens) in &kept {
            if kept_tokens.len() <= tokens.len() {
                // self/subset check
                if tokens.starts_with(kept_tokens) {
                    tracing::trace!(candidate = path, covered_by = %kept_path, "dropping covered path");
                    continue 'candidates;
                }
            } else if kept_tokens.starts_with(&tokens) {
                // superset check
                subsumed.push(kept_path.clone());
            }
        }
        kept.insert(path.to_owned(), tokens);
        for stale in subsumed {
            tracing::trace!(subsumed = %stale, by = path, "dropping subsumed path");
            kept.shift_remove(&stale);
        }
    }
    kept.into_keys().collect()
}
