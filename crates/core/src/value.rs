//! Attribute value model
//!
//! Attribute trees are plain `serde_json` values. A record's attributes, the
//! shared defaults, and every update payload all share one shape: a JSON
//! mapping from attribute name to arbitrary JSON value. This module provides
//! the [`AttrMap`] alias plus the small coercion helpers the engine and
//! service layers lean on.

use crate::error::{LabError, Result};
use serde_json::{Map, Value};

/// An attribute mapping: attribute name to JSON value.
///
/// This is the universal currency of the workspace. Record own-attributes,
/// shared defaults, merge inputs, and effective views are all `AttrMap`s.
pub type AttrMap = Map<String, Value>;

/// Coerce an untrusted JSON value into an attribute mapping.
///
/// Update payloads must be JSON objects. Scalars, arrays, and null are
/// rejected with [`LabError::InvalidInput`] naming the offending type.
///
/// # Examples
///
/// ```
/// use mergelab_core::value::as_object_input;
/// use serde_json::json;
///
/// assert!(as_object_input(json!({"bio": "hi"})).is_ok());
/// assert!(as_object_input(json!([1, 2, 3])).is_err());
/// assert!(as_object_input(json!("plain string")).is_err());
/// ```
pub fn as_object_input(input: Value) -> Result<AttrMap> {
    match input {
        Value::Object(map) => Ok(map),
        other => Err(LabError::invalid_input(format!(
            "update body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON truthiness as the authorization check understands it.
///
/// `null`, `false`, numeric zero, and the empty string are falsy. Everything
/// else is truthy, including empty arrays and empty objects. This mirrors
/// dynamic-language semantics deliberately: a capability that resolves to
/// `{}` or `"yes"` passes the check just as `true` does.
///
/// # Examples
///
/// ```
/// use mergelab_core::value::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(true)));
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!({})));
/// assert!(!is_truthy(&json!(null)));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
