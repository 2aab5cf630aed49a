//! Record type
//!
//! A record is a named entity plus its own attribute mapping. Own attributes
//! always shadow shared defaults during view resolution, so the record type
//! itself stays deliberately dumb: it knows nothing about the store, the
//! denylist, or merge policy.

use mergelab_core::AttrMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named entity with its own attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    attrs: AttrMap,
}

impl Record {
    /// Create a record with no own attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            attrs: AttrMap::new(),
        }
    }

    /// Create a record with initial own attributes.
    pub fn with_attrs(name: impl Into<String>, attrs: AttrMap) -> Self {
        Record {
            name: name.into(),
            attrs,
        }
    }

    /// The record's current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's own attributes.
    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    /// Mutable access to the own-attribute mapping.
    ///
    /// Mutation normally flows through the merge engine; this is the hook it
    /// uses.
    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    /// Look up one own attribute. Does not consult shared defaults.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
