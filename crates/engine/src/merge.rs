//! Policy-mode merge engine
//!
//! Two policies wrap the same recursive combinator:
//!
//! - **Guarded**: the input tree is sanitized first, then deep-merged into
//!   the record's own attributes. The shared default store is never written.
//! - **Unguarded**: the raw input is merged as-is, except that a denylisted
//!   structural key met during the traversal is not stored as an ordinary
//!   own attribute. Its mapping value is redirected into the shared
//!   [`AttributeStore`], where it becomes a fallback visible through every
//!   record. A structural key whose value is not a mapping is dropped.
//!
//! The redirection happens wherever the traversal descends. An overwrite
//! (target key absent, or not a mapping on either side) copies the source
//! subtree verbatim without walking it, matching the plain combinator.

use crate::store::AttributeStore;
use mergelab_core::{deep_merge_map, sanitize_map, AttrMap, Denylist};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which merge path updates take.
///
/// The deployment picks one policy at startup; it applies to every update
/// the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Sanitize inputs, then merge into the record's own attributes only.
    Guarded,
    /// Merge raw inputs; structural keys are redirected into the shared
    /// default store. The stock lab deployment.
    #[default]
    Unguarded,
}

impl MergePolicy {
    /// Whether this is the guarded policy.
    pub fn is_guarded(&self) -> bool {
        matches!(self, MergePolicy::Guarded)
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::Guarded => write!(f, "guarded"),
            MergePolicy::Unguarded => write!(f, "unguarded"),
        }
    }
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guarded" => Ok(MergePolicy::Guarded),
            "unguarded" => Ok(MergePolicy::Unguarded),
            other => Err(format!(
                "unknown merge policy '{other}', expected 'guarded' or 'unguarded'"
            )),
        }
    }
}

/// Applies updates to a record's attributes under a [`MergePolicy`].
///
/// The engine owns the denylist and nothing else; the store is passed per
/// call so a single engine can serve any number of stores in tests.
#[derive(Debug, Clone)]
pub struct MergeEngine {
    denylist: Denylist,
}

impl MergeEngine {
    /// Engine with the stock structural-key denylist.
    pub fn new() -> Self {
        MergeEngine {
            denylist: Denylist::default(),
        }
    }

    /// Engine with a caller-supplied denylist.
    pub fn with_denylist(denylist: Denylist) -> Self {
        MergeEngine { denylist }
    }

    /// The denylist this engine enforces.
    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Merge `input` into `own` under `policy`.
    ///
    /// # Arguments
    ///
    /// * `policy` - guarded or unguarded path
    /// * `own` - the target record's own-attribute mapping
    /// * `store` - the shared default store; written only on the unguarded
    ///   path, and only for denylisted structural keys
    /// * `input` - caller-supplied attribute tree
    pub fn apply(
        &self,
        policy: MergePolicy,
        own: &mut AttrMap,
        store: &AttributeStore,
        input: AttrMap,
    ) {
        match policy {
            MergePolicy::Guarded => {
                let clean = sanitize_map(&input, &self.denylist);
                deep_merge_map(own, clean);
            }
            MergePolicy::Unguarded => self.merge_unguarded(own, store, input),
        }
    }

    fn merge_unguarded(&self, target: &mut AttrMap, store: &AttributeStore, source: AttrMap) {
        for (key, incoming) in source {
            if self.denylist.contains(&key) {
                match incoming {
                    Value::Object(poison) => {
                        tracing::warn!(
                            target: "mergelab::engine",
                            key = %key,
                            injected = poison.len(),
                            "structural key redirected into shared defaults"
                        );
                        store.merge_defaults(poison);
                    }
                    _ => {
                        tracing::debug!(
                            target: "mergelab::engine",
                            key = %key,
                            "structural key with non-mapping value dropped"
                        );
                    }
                }
                continue;
            }
            match incoming {
                Value::Object(nested) => {
                    let slot = target.entry(key).or_insert(Value::Null);
                    if let Value::Object(existing) = slot {
                        self.merge_unguarded(existing, store, nested);
                    } else {
                        *slot = Value::Object(nested);
                    }
                }
                other => {
                    target.insert(key, other);
                }
            }
        }
    }
}

impl Default for MergeEngine {
    fn default() -> Self {
        MergeEngine::new()
    }
}
