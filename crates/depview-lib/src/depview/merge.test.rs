use super::*;
use serde_json::json;

#[test]
fn test_nested_objects_keep_unrelated_keys() {
    let merged = deep_merge(
        json!({ "graph": { "bgcolor": "#eee", "rankdir": "LR" } }),
        json!({ "graph": { "rankdir": "TB" } }),
    );

    assert_eq!(merged, json!({ "graph": { "bgcolor": "#eee", "rankdir": "TB" } }));
}

#[test]
fn test_arrays_are_replaced() {
    let merged = deep_merge(
        json!({ "modules": [{ "a": 1 }, { "b": 2 }] }),
        json!({ "modules": [{ "c": 3 }] }),
    );

    assert_eq!(merged["modules"], json!([{ "c": 3 }]));
}

#[test]
fn test_scalar_overlay_replaces_object() {
    assert_eq!(deep_merge(json!({ "a": { "b": 1 } }), json!({ "a": 2 })), json!({ "a": 2 }));
}
