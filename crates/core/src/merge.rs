//! Recursive deep-merge combinator
//!
//! The one tree algorithm everything else is built on. Semantics:
//! - mapping into mapping: recurse key by key
//! - anything else (scalar, array, null, or a type mismatch): the source
//!   value overwrites the target value wholesale
//! - keys only in the target are untouched; an empty source is a no-op
//!
//! The combinator is policy-free. It never looks at key names, so a
//! structural key in the source lands in the target like any other key.
//! Policy (sanitize-first, or redirect structural keys) lives a layer up.

use crate::value::AttrMap;
use serde_json::Value;

/// Recursively merge `source` into `target` in place.
///
/// When both sides are JSON objects the merge descends; in every other case
/// `target` is replaced by `source`. Later writes win: merging `{"a": 1}`
/// then `{"a": 2}` leaves `a == 2`.
///
/// # Examples
///
/// ```
/// use mergelab_core::merge::deep_merge;
/// use serde_json::json;
///
/// let mut target = json!({"profile": {"bio": "old", "city": "Pune"}});
/// deep_merge(&mut target, json!({"profile": {"bio": "new"}}));
/// assert_eq!(target, json!({"profile": {"bio": "new", "city": "Pune"}}));
/// ```
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            deep_merge_map(target_map, source_map);
        }
        (slot, source_value) => *slot = source_value,
    }
}

/// Merge one attribute mapping into another, key by key.
///
/// The object-level entry point used by record stores, where both sides are
/// known to be mappings already.
pub fn deep_merge_map(target: &mut AttrMap, source: AttrMap) {
    for (key, incoming) in source {
        deep_merge(target.entry(key).or_insert(Value::Null), incoming);
    }
}
