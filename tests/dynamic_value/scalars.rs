//! Scalar accessor tests

use crate::*;

#[test]
fn test_set_int_get_float() {
    let v = Node::new();
    v.set_int(7);
    assert_eq!(v.get_float64(), 7.0);
}

#[test]
fn test_set_float_get_int_truncates() {
    let v = Node::new();
    v.set_float64(7.9);
    assert_eq!(v.get_int(), 7);
}

#[test]
fn test_decoded_numbers_share_one_kind() {
    let v = doc("[1, -2, 3.5, 1e3]");
    for item in v.list() {
        assert_eq!(item.kind(), Kind::Number);
    }
    assert_eq!(v.index(1).unwrap().get_int32(), -2);
    assert_eq!(v.index(2).unwrap().get_float32(), 3.5);
    assert_eq!(v.index(3).unwrap().get_uint(), 1000);
}

#[test]
fn test_huge_integer_precision_loss() {
    let v = doc("9007199254740993");
    assert_eq!(v.get_int64(), 9_007_199_254_740_992);
}

#[test]
fn test_bool_and_string_from_json() {
    let v = doc(r#"{"ok": true, "name": "n"}"#);
    assert!(v.get("ok").unwrap().get_bool());
    assert_eq!(v.get("name").unwrap().get_string(), "n");
    assert_eq!(v.get("name").unwrap().get_float64(), 0.0);
}
