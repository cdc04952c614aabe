// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;
use std::collections::BTreeMap;
use yare::parameterized;

#[parameterized(
    equal_scalars = { json!(1), json!(1), &[] },
    different_numbers = { json!(1), json!(2), &["1 != 2"] },
    strings_unquoted = { json!("a"), json!("b"), &["a != b"] },
    field = { json!({ "name": "x" }), json!({ "name": "y" }), &["name: x != y"] },
    nested_path = {
        json!({ "user": { "tags": ["a", "b"] } }),
        json!({ "user": { "tags": ["a", "c"] } }),
        &["user.tags[1]: b != c"]
    },
    missing_expected_key = { json!({ "a": 1, "b": 2 }), json!({ "a": 1 }), &["b: 2 != <does not have key>"] },
    missing_actual_key = { json!({}), json!({ "a": true }), &["a: <does not have key> != true"] },
    shorter_actual = { json!([1]), json!([1, 2]), &["[1]: <no value> != 2"] },
    longer_actual = { json!([1, 2]), json!([1]), &["[1]: 2 != <no value>"] },
    kind_mismatch = { json!({ "v": [1] }), json!({ "v": { "x": 1 } }), &["v: array != object"] },
    scalar_vs_composite = { json!(null), json!([]), &["null != array"] },
    null_vs_value = { json!({ "v": null }), json!({ "v": 0 }), &["v: null != 0"] },
)]
fn compare_values(actual: serde_json::Value, expected: serde_json::Value, want: &[&str]) {
    assert_eq!(equal(&actual, &expected), want);
}

#[test]
fn stops_after_max_diff() {
    let actual: Vec<u32> = (0..50).collect();
    let expected: Vec<u32> = (100..150).collect();
    let diffs = equal_serialized(&actual, &expected).unwrap();

    assert_eq!(diffs.len(), MAX_DIFF);
    assert_eq!(diffs[0], "[0]: 0 != 100");
    assert_eq!(diffs[MAX_DIFF - 1], "[9]: 9 != 109");
}

#[test]
fn object_keys_are_reported_in_sorted_order() {
    let diffs = equal(&json!({ "b": 1, "a": 1 }), &json!({ "b": 2, "a": 2 }));
    assert_eq!(diffs, vec!["a: 1 != 2", "b: 1 != 2"]);
}

#[derive(Serialize)]
struct Account {
    id: u64,
    owner: String,
}

#[derive(Serialize)]
struct AccountView<'a> {
    id: u64,
    owner: &'a str,
}

#[test]
fn different_types_with_same_shape_are_equal() {
    let account = Account {
        id: 7,
        owner: "ada".into(),
    };
    let view = AccountView { id: 7, owner: "ada" };
    assert!(equal_serialized(&account, &view).unwrap().is_empty());
}

#[test]
fn unserializable_value_is_an_error() {
    let mut bad: BTreeMap<Vec<u8>, u8> = BTreeMap::new();
    bad.insert(vec![1], 1);

    let err = equal_serialized(&bad, &json!({})).unwrap_err();
    assert!(matches!(err, Error::Serialize { side: "actual", .. }));
    assert!(err.to_string().starts_with("cannot serialize actual value"));
}

#[test]
fn non_finite_floats_serialize_as_null() {
    assert!(equal_serialized(&f64::NAN, &()).unwrap().is_empty());
    assert!(equal_serialized(&f64::INFINITY, &None::<u8>).unwrap().is_empty());
    assert_eq!(
        equal_serialized(&f64::NAN, &0.0).unwrap(),
        vec!["null != 0.0"]
    );
}
