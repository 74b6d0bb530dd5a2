//! Path navigation tests

use crate::*;

#[test]
fn test_three_level_path() {
    let v = doc(r#"{"a": {"b": {"c": 5}}}"#);
    assert_eq!(v.get_path(&["a", "b", "c"]).unwrap().get_float64(), 5.0);
    assert!(v.get_path(&["a", "z"]).is_none());
}

#[test]
fn test_path_through_list_fails() {
    let v = doc(r#"{"a": [{"b": 1}]}"#);
    assert!(v.get_path(&["a", "b"]).is_none());
    assert!(v.get_path(&["a", "0"]).is_none());
}

#[test]
fn test_empty_path() {
    let empty: [&str; 0] = [];
    assert!(doc(r#"{"a": 1}"#).get_path(&empty).is_none());
}

#[test]
fn test_path_into_null_binds_it() {
    let v = doc(r#"{"a": null}"#);
    assert!(v.get_path(&["a", "b"]).is_none());
    assert_eq!(v.get("a").unwrap().kind(), Kind::Map);
}

#[test]
fn test_write_through_path() {
    let v = doc(r#"{"cfg": {"retries": 1}}"#);
    v.get_path(&["cfg", "retries"]).unwrap().set_int(3);
    assert_eq!(v.to_json(), r#"{"cfg":{"retries":3}}"#);
}
