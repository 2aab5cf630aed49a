//! Tier 1: laws of the plain deep merge.
//!
//! Exercises the policy-free combinator the rest of the workspace is built
//! on. Nothing here touches a store or a registry except the final
//! property, which lifts idempotence to the service level.

use crate::test_utils::{lab, map};
use mergelab::{deep_merge, deep_merge_map, AttrMap, MergePolicy};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Test: nested maps merge key by key instead of replacing wholesale.
#[test]
fn test_nested_maps_merge_recursively() {
    let mut target = json!({"a": {"x": 1, "y": 2}, "keep": true});
    deep_merge(&mut target, json!({"a": {"y": 20, "z": 30}}));
    assert_eq!(
        target,
        json!({"a": {"x": 1, "y": 20, "z": 30}, "keep": true})
    );
}

/// Test: when the two sides disagree on shape, the source side wins.
#[test]
fn test_shape_conflicts_resolve_to_source() {
    let mut scalar_over_map = json!({"a": {"x": 1}});
    deep_merge(&mut scalar_over_map, json!({"a": 7}));
    assert_eq!(scalar_over_map, json!({"a": 7}));

    let mut map_over_scalar = json!({"a": 7});
    deep_merge(&mut map_over_scalar, json!({"a": {"x": 1}}));
    assert_eq!(map_over_scalar, json!({"a": {"x": 1}}));
}

/// Test: arrays are values, not containers to recurse into.
#[test]
fn test_arrays_replace_wholesale() {
    let mut target = json!({"tags": [1, 2, 3]});
    deep_merge(&mut target, json!({"tags": ["only"]}));
    assert_eq!(target, json!({"tags": ["only"]}));
}

/// Test: null is an ordinary value and overwrites like any other.
#[test]
fn test_null_overwrites() {
    let mut target = json!({"a": {"x": 1}});
    deep_merge(&mut target, json!({"a": null}));
    assert_eq!(target, json!({"a": null}));
}

/// Test: disjoint key sets union without interference.
#[test]
fn test_disjoint_keys_union() {
    let mut target = map(json!({"a": 1}));
    deep_merge_map(&mut target, map(json!({"b": 2, "c": {"d": 3}})));
    assert_eq!(
        Value::Object(target),
        json!({"a": 1, "b": 2, "c": {"d": 3}})
    );
}

/// Test: merging the same source twice is the same as merging it once.
#[test]
fn test_merge_is_idempotent() {
    let source = map(json!({"a": {"x": 1, "y": [2, 3]}, "b": "s"}));
    let mut once = map(json!({"a": {"z": 9}, "c": null}));
    let mut twice = once.clone();

    deep_merge_map(&mut once, source.clone());
    deep_merge_map(&mut twice, source.clone());
    deep_merge_map(&mut twice, source);

    assert_eq!(once, twice);
}

// ==== Properties ====

fn arb_clean_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_clean_object() -> impl Strategy<Value = AttrMap> {
    prop::collection::btree_map("[a-z]{1,6}", arb_clean_value(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    /// Repeating an update changes nothing observable: the effective view
    /// is stable and the shared store stays empty for clean payloads.
    #[test]
    fn prop_repeated_update_is_idempotent_through_the_service(payload in arb_clean_object()) {
        let lab = lab();
        lab.service.register("alice", AttrMap::new()).unwrap();

        let first = lab
            .service
            .update_profile("alice", Value::Object(payload.clone()), MergePolicy::Unguarded)
            .unwrap();
        let second = lab
            .service
            .update_profile("alice", Value::Object(payload), MergePolicy::Unguarded)
            .unwrap();

        prop_assert_eq!(first, second);
        prop_assert!(lab.store.is_empty());
    }
}
