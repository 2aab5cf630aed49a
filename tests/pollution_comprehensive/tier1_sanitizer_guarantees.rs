//! Tier 1: what the sanitizer removes and what it leaves alone.

use crate::test_utils::map;
use mergelab::{sanitize, sanitize_map, Denylist, DEFAULT_STRUCTURAL_KEYS};
use serde_json::{json, Value};

/// Every denylisted key reachable in `value`, in traversal order.
fn denylisted_keys(value: &Value, denylist: &Denylist) -> Vec<String> {
    let mut found = Vec::new();
    collect(value, denylist, &mut found);
    found
}

fn collect(value: &Value, denylist: &Denylist, found: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                if denylist.contains(key) {
                    found.push(key.clone());
                }
                collect(nested, denylist, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, denylist, found);
            }
        }
        _ => {}
    }
}

/// Test: structural keys vanish at every depth, including inside arrays.
#[test]
fn test_strip_at_every_depth() {
    let dirty = json!({
        "__proto__": {"isAdmin": true},
        "profile": {
            "constructor": {"prototype": {"x": 1}},
            "bio": "hi",
            "links": [{"prototype": 1, "url": "a"}, "plain"]
        }
    });

    let clean = sanitize(&dirty, Denylist::standard());

    assert!(denylisted_keys(&clean, Denylist::standard()).is_empty());
    assert_eq!(
        clean,
        json!({"profile": {"bio": "hi", "links": [{"url": "a"}, "plain"]}})
    );
    // Input is untouched.
    assert_eq!(denylisted_keys(&dirty, Denylist::standard()).len(), 3);
}

/// Test: the match is exact; near misses and denylisted *values* survive.
#[test]
fn test_near_misses_and_values_survive() {
    let input = map(json!({
        "__PROTO__": 1,
        "proto": 2,
        "prototype_": 3,
        " constructor": 4,
        "note": "__proto__"
    }));
    assert_eq!(sanitize_map(&input, Denylist::standard()), input);
}

/// Test: all three standard keys are covered by the default list.
#[test]
fn test_standard_list_covers_all_structural_keys() {
    for key in DEFAULT_STRUCTURAL_KEYS {
        assert!(Denylist::standard().contains(key), "missing {key}");
    }
    assert_eq!(Denylist::standard().len(), DEFAULT_STRUCTURAL_KEYS.len());
}

/// Test: an extended denylist strips its extra key everywhere too.
#[test]
fn test_extended_denylist() {
    let denylist = Denylist::standard().clone().with_key("secret");
    let dirty = json!({"secret": 1, "a": {"secret": 2, "keep": 3}, "__proto__": 4});
    assert_eq!(sanitize(&dirty, &denylist), json!({"a": {"keep": 3}}));
}

/// Test: sanitizing twice is the same as sanitizing once.
#[test]
fn test_sanitize_is_idempotent() {
    let dirty = json!({"__proto__": {"x": 1}, "a": {"constructor": 2, "b": [3]}});
    let once = sanitize(&dirty, Denylist::standard());
    let twice = sanitize(&once, Denylist::standard());
    assert_eq!(once, twice);
}
