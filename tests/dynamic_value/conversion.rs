//! Conversion tests: JSON text, native objects and typed records

use crate::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Order {
    id: u64,
    items: Vec<Line>,
    note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Line {
    sku: String,
    qty: u32,
    price: f64,
}

fn sample_order() -> Order {
    Order {
        id: 17,
        items: vec![
            Line {
                sku: "a-1".to_string(),
                qty: 2,
                price: 9.5,
            },
            Line {
                sku: "b-2".to_string(),
                qty: 1,
                price: 20.0,
            },
        ],
        note: None,
    }
}

#[test]
fn test_malformed_document_is_absent() {
    assert!(Node::from_json(r#"{"a": }"#).is_none());
    assert!(Node::from_json("nul").is_none());
}

#[test]
fn test_record_to_node_and_back() {
    let order = sample_order();
    let node = Node::from_object(&order).unwrap();

    assert_eq!(node.get("id").unwrap().get_uint64(), 17);
    assert_eq!(
        node.get("items").unwrap().index(1).unwrap().get("sku").unwrap().get_string(),
        "b-2"
    );
    assert!(node.get("note").unwrap().is_unbound());

    let back: Order = node.conv_to().unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_edit_then_convert() {
    let node = Node::from_object(&sample_order()).unwrap();
    node.get("items").unwrap().remove_id(0);
    node.set_key("note", "rush");

    let order: Order = node.conv_to().unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].sku, "b-2");
    assert_eq!(order.note.as_deref(), Some("rush"));
}

#[test]
fn test_conv_to_wrong_shape() {
    let node = doc(r#"{"id": "seventeen", "items": []}"#);
    let err = node.conv_to::<Order>().unwrap_err();
    let err: Error = err.into();
    assert!(err.is_serialization());
}

#[test]
fn test_to_object_matches_codec_tree() {
    let node = doc(r#"{"a": [1, {"b": null}], "c": "d"}"#);
    assert_eq!(node.to_object(), json!({"a": [1, {"b": null}], "c": "d"}));
}

#[test]
fn test_native_map_and_vec() {
    let mut scores = HashMap::new();
    scores.insert("ann".to_string(), vec![1.5, 2.0]);
    scores.insert("bob".to_string(), vec![]);
    let node = Node::from(scores);

    assert_eq!(node.kind(), Kind::Map);
    assert_eq!(node.get("ann").unwrap().index(0).unwrap().get_float64(), 1.5);
    assert_eq!(node.get("bob").unwrap().kind(), Kind::List);
    assert_eq!(node.get("bob").unwrap().to_json(), "[]");
}

#[test]
fn test_init_by_object_replaces_contents() {
    let node = doc("[1, 2]");
    node.init_by_object(&json!({"now": "map"})).unwrap();
    assert_eq!(node.kind(), Kind::Map);
    assert_eq!(node.get("now").unwrap().get_string(), "map");
}

#[test]
fn test_init_by_value_shares_container_with_source() {
    let source = doc(r#"{"a": 1}"#);
    let copy = Node::new();
    copy.init_by_value(source.clone());

    copy.set_key("b", 2);
    assert!(source.has_key("b"));
    assert_eq!(source.to_object(), json!({"a": 1, "b": 2}));

    let independent = source.deep_clone();
    independent.set_key("c", 3);
    assert!(!source.has_key("c"));
}

#[test]
fn test_node_round_trips_inside_record() {
    #[derive(Serialize, Deserialize)]
    struct Rpc {
        method: String,
        params: Node,
    }

    let rpc: Rpc = unmarshal_string(r#"{"method": "add", "params": {"x": 1, "y": [2]}}"#).unwrap();
    assert_eq!(rpc.method, "add");
    rpc.params.get("y").unwrap().append(3);

    let out = String::from_utf8(marshal(&rpc).unwrap()).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(tree, json!({"method": "add", "params": {"x": 1, "y": [2, 3]}}));
}

#[test]
fn test_display_is_compact_json() {
    let node = doc(r#"{ "k" : [ 1 , 2 ] }"#);
    assert_eq!(node.to_string(), r#"{"k":[1,2]}"#);
}
