//! Dot-path lookup behavior.

use pathmap_property::{get_property, Lookup};
use serde_json::json;

#[test]
fn resolves_nested_object_members() {
    let source = json!({ "a": { "b": { "c": 42 } } });
    let lookup = get_property(&source, "a.b.c");
    assert!(lookup.is_hit());
    assert_eq!(lookup.value, Some(&json!(42)));
}

#[test]
fn resolves_array_indices_from_numeric_tokens() {
    let source = json!({ "rows": [[1, 2], [3, 4]] });
    assert_eq!(get_property(&source, "rows.1.0").value, Some(&json!(3)));
}

#[test]
fn tolerates_whitespace_around_index_tokens() {
    let source = json!({ "rows": [10, 20] });
    assert_eq!(get_property(&source, "rows. 1 ").value, Some(&json!(20)));
}

#[test]
fn numeric_tokens_resolve_object_members_too() {
    let source = json!({ "0": { "1": "x" } });
    assert_eq!(get_property(&source, "0.1").value, Some(&json!("x")));
}

#[test]
fn an_explicit_null_is_a_hit() {
    let source = json!({ "a": null });
    let lookup = get_property(&source, "a");
    assert!(lookup.exists);
    assert_eq!(lookup.value, Some(&serde_json::Value::Null));
}

#[test]
fn a_missing_member_is_a_miss() {
    let source = json!({ "a": 1 });
    assert_eq!(get_property(&source, "b"), Lookup::miss());
}

#[test]
fn an_out_of_bounds_index_is_a_miss() {
    let source = json!({ "tags": ["x", "y"] });
    assert_eq!(get_property(&source, "tags.44"), Lookup::miss());
}

#[test]
fn a_non_numeric_token_against_an_array_is_a_miss() {
    let source = json!({ "tags": ["x", "y"] });
    assert_eq!(get_property(&source, "tags.first"), Lookup::miss());
}

#[test]
fn scalars_cannot_be_traversed() {
    let source = json!({ "a": 7 });
    assert_eq!(get_property(&source, "a.b"), Lookup::miss());
}

#[test]
fn traversal_does_not_pass_through_null() {
    let source = json!({ "a": null });
    assert_eq!(get_property(&source, "a.b"), Lookup::miss());
}

#[test]
fn an_empty_path_resolves_to_the_source_itself() {
    let source = json!({ "a": 1 });
    let lookup = get_property(&source, "");
    assert!(lookup.exists);
    assert_eq!(lookup.value, Some(&source));
}

#[test]
fn empty_tokens_are_skipped() {
    let source = json!({ "a": { "b": 1 } });
    assert_eq!(get_property(&source, "a..b").value, Some(&json!(1)));
}
