//! Path resolution against a JSON value tree.

use serde_json::Value;

/// Result of resolving a dot-path: whether anything exists at the path,
/// and a borrow of the value when it does.
///
/// `exists == true` with `Some(&Value::Null)` means the path landed on an
/// explicit JSON `null`. `exists == false` means nothing is there at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup<'a> {
    pub exists: bool,
    pub value: Option<&'a Value>,
}

impl<'a> Lookup<'a> {
    /// A successful resolution.
    #[must_use]
    pub fn hit(value: &'a Value) -> Self {
        Self {
            exists: true,
            value: Some(value),
        }
    }

    /// A failed resolution.
    #[must_use]
    pub fn miss() -> Self {
        Self {
            exists: false,
            value: None,
        }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.exists
    }
}

impl Default for Lookup<'_> {
    fn default() -> Self {
        Self::miss()
    }
}

/// Resolve `dot_path` against `source`.
///
/// Object nodes resolve tokens as member names. Array nodes parse tokens as
/// base-10 indices, tolerating surrounding ASCII whitespace; a failed parse
/// or an out-of-bounds index is a miss. Scalar nodes cannot be traversed.
/// Empty tokens are skipped, so an empty path resolves to `source` itself.
#[must_use]
pub fn get_property<'a>(source: &'a Value, dot_path: &str) -> Lookup<'a> {
    let mut current = source;
    for token in dot_path.split('.') {
        if token.is_empty() {
            continue;
        }
        let next = match current {
            Value::Object(members) => members.get(token),
            Value::Array(items) => token
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Lookup::miss(),
        }
    }
    Lookup::hit(current)
}
