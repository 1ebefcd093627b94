//! Integration tests for querying Rust records converted at the boundary.

use keytrail::document::Value;
use keytrail::{key_search, key_search_sorted, path_walk, to_value};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct SecondLevel {
    nested_field1: String,
    nested_field2: i32,
}

#[derive(Serialize)]
struct FirstLevel {
    second: SecondLevel,
    nested_field1: String,
    nested_field2: i32,
}

#[derive(Serialize)]
struct TestStruct {
    field1: String,
    field2: i32,
    nested: FirstLevel,
}

fn sample() -> Value {
    to_value(&TestStruct {
        field1: "test".to_string(),
        field2: 123,
        nested: FirstLevel {
            second: SecondLevel {
                nested_field1: "deeper".to_string(),
                nested_field2: 789,
            },
            nested_field1: "nested".to_string(),
            nested_field2: 456,
        },
    })
    .unwrap()
}

#[test]
fn test_walk_top_level_fields() {
    let doc = sample();
    assert_eq!(path_walk(&doc, &["field1"], "default", "first"), Value::from("test"));
    assert_eq!(path_walk(&doc, &["field2"], "default", "first"), Value::from(123i64));
}

#[test]
fn test_walk_nested_fields() {
    let doc = sample();
    assert_eq!(
        path_walk(&doc, &["nested", "nested_field1"], "default", "first"),
        Value::from("nested")
    );
    assert_eq!(
        path_walk(&doc, &["nested", "nested_field2"], "default", "first"),
        Value::from(456i64)
    );
    assert_eq!(
        path_walk(&doc, &["nested", "second", "nested_field1"], "default", "first"),
        Value::from("deeper")
    );
}

#[test]
fn test_walk_missing_field() {
    let doc = sample();
    assert_eq!(
        path_walk(&doc, &["nested", "absent"], "default", "first"),
        Value::from("default")
    );
}

#[test]
fn test_search_record_at_any_depth() {
    let doc = sample();
    assert_eq!(
        key_search(&doc, "nested_field1", "default", "all"),
        Value::Sequence(vec![Value::from("deeper"), Value::from("nested")])
    );
    assert_eq!(
        key_search(&doc, "nested_field2", "default", "last"),
        Value::from(456i64)
    );
}

#[test]
fn test_sorted_search_over_hash_map_is_deterministic() {
    #[derive(Serialize)]
    struct Holder {
        by_name: HashMap<String, Entry>,
    }

    #[derive(Serialize)]
    struct Entry {
        label: String,
    }

    let mut by_name = HashMap::new();
    for name in ["c", "a", "b", "e", "d"] {
        by_name.insert(
            name.to_string(),
            Entry {
                label: format!("label-{}", name),
            },
        );
    }
    let doc = to_value(&Holder { by_name }).unwrap();

    assert_eq!(
        key_search_sorted(&doc, "label", "none", "first"),
        Value::from("label-a")
    );
    assert_eq!(
        key_search_sorted(&doc, "label", "none", "last"),
        Value::from("label-e")
    );
}

#[test]
fn test_record_with_sequence_of_records_fans_out() {
    #[derive(Serialize)]
    struct Item {
        sku: &'static str,
    }

    #[derive(Serialize)]
    struct Order {
        items: Vec<Item>,
    }

    let doc = to_value(&Order {
        items: vec![Item { sku: "A1" }, Item { sku: "B2" }],
    })
    .unwrap();

    assert_eq!(
        path_walk(&doc, &["items", "sku"], "none", "all"),
        Value::Sequence(vec![Value::from("A1"), Value::from("B2")])
    );
}

#[test]
fn test_record_option_fields() {
    #[derive(Serialize)]
    struct Maybe {
        present: Option<u8>,
        absent: Option<u8>,
    }

    let doc = to_value(&Maybe {
        present: Some(3),
        absent: None,
    })
    .unwrap();

    assert_eq!(path_walk(&doc, &["present"], "none", "first"), Value::from(3u64));
    assert_eq!(path_walk(&doc, &["absent"], "none", "first"), Value::Null);
}
