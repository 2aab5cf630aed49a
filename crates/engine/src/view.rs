//! Effective-view resolution
//!
//! Two-tier attribute lookup: a record's own attributes shadow the shared
//! defaults, and anything missing from the record falls through to the
//! store. This fallback is exactly what makes store pollution observable
//! through records that were never touched.

use crate::store::AttributeStore;
use mergelab_core::AttrMap;
use serde_json::Value;

/// Materialize the full effective view: defaults overlaid by own attributes.
///
/// Own attributes win on key collisions. The result is a snapshot; later
/// store writes do not retroactively change it.
pub fn effective_view(own: &AttrMap, store: &AttributeStore) -> AttrMap {
    let mut view = store.snapshot();
    for (key, value) in own {
        view.insert(key.clone(), value.clone());
    }
    view
}

/// Resolve a single attribute through the two tiers.
pub fn effective_get(own: &AttrMap, store: &AttributeStore, key: &str) -> Option<Value> {
    own.get(key).cloned().or_else(|| store.get(key))
}
