//! Shared helpers for the pollution comprehensive suite.

use mergelab::{AttrMap, AttributeStore, ProfileService, RecordRegistry};
use serde_json::{json, Value};
use std::sync::Arc;

/// A fully wired lab: service plus the shared pieces behind it, so tests
/// can observe the store and registry directly.
pub struct Lab {
    pub service: ProfileService,
    pub registry: Arc<RecordRegistry>,
    pub store: Arc<AttributeStore>,
}

/// Build a fresh lab with an empty store and only the demo record.
pub fn lab() -> Lab {
    let registry = Arc::new(RecordRegistry::new());
    let store = Arc::new(AttributeStore::new());
    let service = ProfileService::new(Arc::clone(&registry), Arc::clone(&store));
    Lab {
        service,
        registry,
        store,
    }
}

/// Coerce a `json!` literal into an attribute map.
pub fn map(value: Value) -> AttrMap {
    value.as_object().cloned().unwrap_or_default()
}

/// The canonical privilege-escalation payload.
pub fn admin_payload() -> Value {
    json!({"__proto__": {"isAdmin": true}})
}
