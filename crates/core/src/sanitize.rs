//! Recursive input sanitizer
//!
//! The guarded counterpart to the unguarded merge path: walk an arbitrary
//! JSON tree and drop every denylisted key at every depth, keeping all
//! other structure intact. Arrays are traversed so that objects nested
//! inside them are cleaned too.
//!
//! Sanitization is pure and non-destructive: callers get a fresh tree and
//! the input is never mutated.

use crate::denylist::Denylist;
use crate::value::AttrMap;
use serde_json::Value;

/// Return a copy of `value` with every denylisted key removed, at any depth.
///
/// # Examples
///
/// ```
/// use mergelab_core::{sanitize, Denylist};
/// use serde_json::json;
///
/// let dirty = json!({
///     "bio": "hi",
///     "__proto__": {"isAdmin": true},
///     "nested": {"constructor": {"prototype": {"x": 1}}, "keep": 2}
/// });
/// let clean = sanitize(&dirty, Denylist::standard());
/// assert_eq!(clean, json!({"bio": "hi", "nested": {"keep": 2}}));
/// ```
pub fn sanitize(value: &Value, denylist: &Denylist) -> Value {
    match value {
        Value::Object(map) => Value::Object(sanitize_map(map, denylist)),
        Value::Array(items) => Value::Array(items.iter().map(|v| sanitize(v, denylist)).collect()),
        leaf => leaf.clone(),
    }
}

/// Sanitize an attribute mapping directly.
pub fn sanitize_map(map: &AttrMap, denylist: &Denylist) -> AttrMap {
    map.iter()
        .filter(|(key, _)| !denylist.contains(key))
        .map(|(key, value)| (key.clone(), sanitize(value, denylist)))
        .collect()
}

/// Whether `value` contains a denylisted key anywhere in its tree.
///
/// Used by tests and diagnostics to assert sanitizer completeness.
pub fn contains_denylisted(value: &Value, denylist: &Denylist) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(key, nested)| denylist.contains(key) || contains_denylisted(nested, denylist)),
        Value::Array(items) => items.iter().any(|v| contains_denylisted(v, denylist)),
        _ => false,
    }
}
