//! Property-path normalization.
//!
//! Bracket index accesses (`[2]`, `[ 2 ]`) and dot segments (`.2`) are
//! interchangeable on input; everything normalizes to dot form before
//! comparison or lookup.

/// Convert bracket index accesses to dot segments and strip a leading dot.
/// A dot immediately preceding a bracket is absorbed, so `a.[2]` and
/// `a[2]` normalize identically.
///
/// Purely textual and best-effort: a bracket group that does not contain a
/// (possibly whitespace-padded) run of ASCII digits is passed through
/// unchanged. Use [`parse_property_path`](super::parse_property_path) to
/// reject such input up front instead.
#[must_use]
pub fn to_dot_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(open) = rest.find('[') {
        let (head, tail) = rest.split_at(open);
        match scan_bracket_index(tail) {
            Some((index, after)) => {
                out.push_str(head);
                // a dot written just before the bracket already separates
                if !out.is_empty() && !out.ends_with('.') {
                    out.push('.');
                }
                out.push_str(index);
                rest = after;
            }
            None => {
                out.push_str(head);
                out.push('[');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    if out.starts_with('.') {
        out.remove(0);
    }
    out
}

/// Split a path into its dot-normalized tokens.
#[must_use]
pub fn tokenize(path: &str) -> Vec<String> {
    to_dot_path(path).split('.').map(str::to_owned).collect()
}

/// `tail` starts at `[`. Returns the trimmed digit run and the remainder
/// after the closing bracket when the group is a well-formed index.
fn scan_bracket_index(tail: &str) -> Option<(&str, &str)> {
    let close = tail.find(']')?;
    let body = tail[1..close].trim();
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((body, &tail[close + 1..]))
}
