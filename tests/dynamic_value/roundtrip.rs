//! Round-trip property tests
//!
//! For any tree decoded from well-formed JSON, encoding and decoding again
//! gives a deeply equal tree.

use crate::*;
use proptest::prelude::*;
use serde_json::Value as JsonValue;

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1_000_000_i64..1_000_000).prop_map(|n| json!(n as f64 / 8.0)),
        "[a-z0-9 \\n\"\\\\]{0,8}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::hash_map("[a-z]{1,4}", inner, 0..6)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_decode_encode_decode_is_stable(tree in arb_json()) {
        let text = serde_json::to_string(&tree).unwrap();
        let first = Node::from_json(&text).unwrap();
        let second = Node::from_json(&first.to_json()).unwrap();
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn prop_to_object_is_stable(tree in arb_json()) {
        let node = Node::from(tree);
        let once = node.to_object();
        let twice = Node::from(once.clone()).to_object();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_set_int_reads_back(n in any::<i32>()) {
        let node = Node::new();
        node.set_int32(n);
        prop_assert_eq!(node.get_int32(), n);
        prop_assert_eq!(node.get_float64(), n as f64);
    }
}

#[test]
fn test_round_trip_keeps_list_order() {
    let text = r#"[3, 1, 2, {"z": 0, "a": [true, false]}]"#;
    let first = doc(text);
    let second = doc(&first.to_json());
    assert_eq!(first, second);
    assert_eq!(second.index(0).unwrap().get_int(), 3);
}
