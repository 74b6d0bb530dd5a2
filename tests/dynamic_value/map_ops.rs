//! Map accessor tests

use crate::*;

#[test]
fn test_confirm_required_fields() {
    let v = doc(r#"{"a": 1, "b": 2}"#);
    assert_eq!(v.confirm(&["a", "b", "c"]), ("c".to_string(), false));
    assert_eq!(v.confirm(&["a"]), (String::new(), true));
}

#[test]
fn test_confirm_on_list() {
    let v = doc("[1]");
    assert_eq!(v.confirm(&["a"]), (dynjson::NOT_A_MAP.to_string(), false));
}

#[test]
fn test_aliasing_through_get() {
    let m = doc(r#"{"a": "x"}"#);
    m.get("a").unwrap().set_string("y");
    assert_eq!(m.get("a").unwrap().get_string(), "y");
    assert_eq!(m.to_json(), r#"{"a":"y"}"#);
}

#[test]
fn test_safe_get_distinguishes_failures() {
    let m = doc(r#"{"a": 1}"#);
    assert!(m.safe_get("a").is_ok());
    assert!(m.safe_get("b").unwrap_err().is_not_found());
    assert!(doc("3").safe_get("a").unwrap_err().is_wrong_type());
}

#[test]
fn test_set_key_shares_subtree() {
    let shared = doc(r#"{"n": 1}"#);
    let root = Node::new();
    root.set_key("left", shared.clone());
    root.set_key("right", shared.clone());

    shared.set_key("n", 2);
    assert_eq!(root.get_path(&["left", "n"]).unwrap().get_int(), 2);
    assert_eq!(root.get_path(&["right", "n"]).unwrap().get_int(), 2);
}

#[test]
fn test_remove_then_has() {
    let m = doc(r#"{"a": 1, "b": 2}"#);
    m.remove_key("a");
    assert!(!m.has_key("a"));
    assert!(m.has_key("b"));
    assert_eq!(m.len(), 1);
}

#[test]
fn test_set_key_raw_collections() {
    let m = Node::new();
    m.set_key("list", vec![1, 2]);
    m.set_key("none", None::<i32>);
    m.set_key("json", json!({"deep": [true]}));

    assert_eq!(m.get("list").unwrap().len(), 2);
    assert!(m.get("none").unwrap().is_unbound());
    assert!(m
        .get_path(&["json", "deep"])
        .unwrap()
        .index(0)
        .unwrap()
        .get_bool());
}

#[test]
fn test_keys_and_map_snapshot() {
    let m = doc(r#"{"x": 1, "y": 2}"#);
    let mut keys = m.keys();
    keys.sort();
    assert_eq!(keys, vec!["x", "y"]);

    let total: isize = m.map().values().map(Node::get_int).sum();
    assert_eq!(total, 3);
}
