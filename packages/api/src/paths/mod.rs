//! Property-path handling: normalization, strict parsing, arrangement.

mod arrange;
mod syntax;
mod tokens;

pub use arrange::arrange_property_paths;
pub use syntax::{parse_property_path, PathSyntaxError, PathToken};
pub use tokens::{to_dot_path, tokenize};
