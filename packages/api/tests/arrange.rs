//! Path arrangement behavior.

use pathmap::arrange_property_paths;

#[test]
fn removes_subset_paths_and_maintains_inclusion_order() {
    let arranged = arrange_property_paths([
        "address",
        "friends[1].id",          // subset
        "registered.time.hours",  // subset
        "matrix.0.1",
        "friends[1]",
        "history.places",         // subset
        "registered.time",
        "matrix[2][2]",
        "friends[1].name.last",   // subset
        "history.places[2].year", // subset
        "tags[4]",
        "history",
    ]);
    assert_eq!(
        arranged,
        [
            "address",
            "matrix.0.1",
            "friends[1]",
            "registered.time",
            "matrix[2][2]",
            "tags[4]",
            "history",
        ],
    );
}

#[test]
fn removes_duplicate_paths() {
    let arranged = arrange_property_paths([
        "friends[1]",
        "friends[1]",
        "address",
        "matrix.0.1",
        "history.places[2].year", // subset
        "friends[1]",
        "history",
        "registered.time",
        "address",
        "matrix[2][2]",
        "history",
        "tags[4]",
    ]);
    assert_eq!(
        arranged,
        [
            "friends[1]",
            "address",
            "matrix.0.1",
            "history",
            "registered.time",
            "matrix[2][2]",
            "tags[4]",
        ],
    );
}

#[test]
fn returns_identical_list_when_no_duplicates_or_subsets_found() {
    let paths = vec![
        "address".to_string(),
        "friends[1]".to_string(),
        "history".to_string(),
        "registered.time".to_string(),
        "tags[4]".to_string(),
    ];
    let arranged = arrange_property_paths(&paths);
    assert_eq!(arranged, paths);
}

#[test]
fn is_idempotent() {
    let input = [
        "address",
        "friends[1].id",
        "friends[1]",
        "registered.time.hours",
        "registered.time",
        "history",
    ];
    let once = arrange_property_paths(input);
    let twice = arrange_property_paths(&once);
    assert_eq!(twice, once);
}

#[test]
fn ancestor_wins_regardless_of_input_order() {
    assert_eq!(arrange_property_paths(["a.b.c.d", "a.b"]), ["a.b"]);
    assert_eq!(arrange_property_paths(["a.b", "a.b.c.d"]), ["a.b"]);
}

#[test]
fn superset_takes_its_own_first_seen_position() {
    // "a.b" subsumes the earlier "a.b.c" but does not inherit its slot
    assert_eq!(
        arrange_property_paths(["a.b.c", "x", "a.b"]),
        ["x", "a.b"],
    );
}

#[test]
fn one_candidate_may_subsume_multiple_kept_paths() {
    assert_eq!(
        arrange_property_paths(["a.b.c", "a.d", "x", "a"]),
        ["x", "a"],
    );
}

#[test]
fn bracket_and_dot_index_notations_are_equivalent() {
    assert_eq!(arrange_property_paths(["a[1]", "a.1"]), ["a[1]"]);
    assert_eq!(arrange_property_paths(["a.1.b", "a[1]"]), ["a[1]"]);
}

#[test]
fn empty_input_produces_empty_output() {
    let arranged = arrange_property_paths(Vec::<String>::new());
    assert!(arranged.is_empty());
}

#[test]
fn single_path_is_returned_unchanged() {
    assert_eq!(arrange_property_paths(["a.b[2].c"]), ["a.b[2].c"]);
}
