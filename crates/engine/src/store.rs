//! Shared default-attribute store
//!
//! One process-wide mapping of fallback attributes. Every record's effective
//! view is resolved against this store: an attribute missing from a record's
//! own mapping falls through to the default here. That makes the store the
//! blast radius of the unguarded merge path, because a single privileged
//! write is visible through every record at once.
//!
//! # Design
//!
//! - Created once at startup and shared by `Arc`; never a module-level
//!   static, so tests get isolated instances.
//! - A `parking_lot::RwLock` over the map: reads are concurrent, writes are
//!   rare (startup seeding and structural-key redirection only).
//! - Readers receive clones. No lock guard ever escapes this module.
//!
//! # Thread Safety
//!
//! All methods take `&self` and are safe to call from any thread.

use mergelab_core::{deep_merge_map, AttrMap};
use parking_lot::RwLock;
use serde_json::Value;

/// The shared fallback-attribute mapping.
#[derive(Debug, Default)]
pub struct AttributeStore {
    defaults: RwLock<AttrMap>,
}

impl AttributeStore {
    /// Create an empty store. The stock deployment starts with no defaults.
    pub fn new() -> Self {
        AttributeStore {
            defaults: RwLock::new(AttrMap::new()),
        }
    }

    /// Create a store pre-seeded with `defaults`.
    pub fn with_defaults(defaults: AttrMap) -> Self {
        AttributeStore {
            defaults: RwLock::new(defaults),
        }
    }

    /// Look up one default attribute.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.defaults.read().get(key).cloned()
    }

    /// Whether a default exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.defaults.read().contains_key(key)
    }

    /// Names of all default attributes, in map order.
    pub fn keys(&self) -> Vec<String> {
        self.defaults.read().keys().cloned().collect()
    }

    /// A point-in-time copy of the whole default mapping.
    pub fn snapshot(&self) -> AttrMap {
        self.defaults.read().clone()
    }

    /// Number of default attributes.
    pub fn len(&self) -> usize {
        self.defaults.read().len()
    }

    /// Whether the store holds no defaults.
    pub fn is_empty(&self) -> bool {
        self.defaults.read().is_empty()
    }

    /// Privileged write of a single default attribute.
    ///
    /// Ordinary update flows never reach this; the only callers are startup
    /// seeding and the unguarded engine's structural-key redirection.
    pub fn set_default(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        tracing::debug!(target: "mergelab::engine", key = %key, "default attribute written");
        self.defaults.write().insert(key, value);
    }

    /// Privileged bulk write: deep-merge `incoming` into the defaults.
    ///
    /// Uses the same recursive combinator as record merges, so nested
    /// default structures accumulate instead of being replaced wholesale.
    pub fn merge_defaults(&self, incoming: AttrMap) {
        if incoming.is_empty() {
            return;
        }
        tracing::debug!(
            target: "mergelab::engine",
            keys = incoming.len(),
            "defaults merged"
        );
        deep_merge_map(&mut self.defaults.write(), incoming);
    }
}
