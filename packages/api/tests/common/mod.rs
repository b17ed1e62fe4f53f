//! Shared source fixture for projection tests.

use serde_json::{json, Value};

/// A nested person record with objects, arrays, and mixed depth.
pub fn source_data() -> Value {
    json!({
        "address": {
            "city": "Auckland",
            "line1": "478 Yancey Drive",
            "state": "Nelson",
            "zip": 6942
        },
        "company": "NAPPIES",
        "friends": [
            { "id": 0, "name": { "first": "Pollard", "last": "Hunter" } },
            { "id": 1, "name": { "first": "Holly", "last": "Roberson" } },
            { "id": 2, "name": { "first": "Carey", "last": "Osborne" } }
        ],
        "history": {
            "places": [
                { "city": "Topeka", "year": "1997" },
                { "city": "Atlanta", "year": "2002" },
                { "city": "Miami", "year": "2011" }
            ]
        },
        "registered": {
            "day": 18,
            "time": { "hours": 9, "minutes": 55, "seconds": 46 },
            "timezone": "+06:00"
        },
        "tags": ["minim", "nisi", "dolore", "in", "ullamco", "laborum", "proident"]
    })
}

/// `source_data` with a 3x3 numeric matrix attached.
pub fn source_with_matrix() -> Value {
    let mut source = source_data();
    source["matrix"] = json!([
        [0, 3, 9],
        [4, 1, 1],
        [8, 7, 3]
    ]);
    source
}

/// `source_data` with a 3x2x3 cube attached.
pub fn source_with_cube() -> Value {
    let mut source = source_data();
    source["matrix"] = json!([
        [[0, 3, 1], [4, 0, 3]],
        [[4, 1, 9], [7, 4, 9]],
        [[8, 7, 3], [0, 3, 1]]
    ]);
    source
}
