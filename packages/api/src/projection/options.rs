//! Projection options and the per-path value transform.

use serde_json::Value;

/// Descriptor handed to a [`Transform`] for each resolvable path.
#[derive(Debug, Clone, Copy)]
pub struct PropertyInfo<'a> {
    /// Whether the lookup resolved. The projector never invokes a
    /// transform for a path that did not, so this is `true` in practice;
    /// it is carried so transforms can be reused as standalone callbacks.
    pub exists: bool,
    /// The resolved value. `Some(&Value::Null)` is an explicit null.
    pub value: Option<&'a Value>,
    /// The arranged dot-path that resolved to `value`.
    pub path: &'a str,
}

/// Per-path leaf transform. The default clones the looked-up value.
pub type Transform = Box<dyn Fn(&PropertyInfo<'_>) -> Value>;

/// Array handling switches for [`map_paths_to_object_with`](super::map_paths_to_object_with).
#[derive(Debug, Clone, Copy)]
pub struct ArrayOptions {
    /// Restore native sequences where the source held arrays.
    pub preserve: bool,
    /// Keep holes at unset indices. Only meaningful with `preserve`.
    pub sparse: bool,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            preserve: false,
            sparse: true,
        }
    }
}

/// Options for [`map_paths_to_object_with`](super::map_paths_to_object_with).
#[derive(Default)]
pub struct MapOptions {
    pub(crate) transform: Option<Transform>,
    pub(crate) arrays: ArrayOptions,
}

impl MapOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `transform` to every resolved value.
    #[must_use]
    pub fn transform(mut self, transform: impl Fn(&PropertyInfo<'_>) -> Value + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    #[must_use]
    pub fn preserve_arrays(mut self, preserve: bool) -> Self {
        self.arrays.preserve = preserve;
        self
    }

    #[must_use]
    pub fn sparse_arrays(mut self, sparse: bool) -> Self {
        self.arrays.sparse = sparse;
        self
    }

    pub(crate) fn apply(&self, info: &PropertyInfo<'_>) -> Value {
        match &self.transform {
            Some(transform) => transform(info),
            None => info.value.cloned().unwrap_or(Value::Null),
        }
    }
}

/// A bare closure is accepted wherever options are, mirroring the
/// transform-only call form.
impl<F> From<F> for MapOptions
where
    F: Fn(&PropertyInfo<'_>) -> Value + 'static,
{
    fn from(transform: F) -> Self {
        MapOptions::new().transform(transform)
    }
}
