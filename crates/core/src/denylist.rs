//! Structural-key denylist
//!
//! A small, exact-match set of key names that the sanitizer strips and the
//! unguarded merge engine redirects into the shared defaults. The stock set
//! is the three names that address an object's structure rather than its
//! data: `__proto__`, `constructor`, and `prototype`.
//!
//! Matching is case-sensitive and byte-exact. `__PROTO__` and `__proto___`
//! are ordinary keys.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The stock structural key names.
pub const DEFAULT_STRUCTURAL_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

static STANDARD: Lazy<Denylist> = Lazy::new(|| Denylist::new(DEFAULT_STRUCTURAL_KEYS));

/// An exact-match set of denylisted key names.
///
/// # Examples
///
/// ```
/// use mergelab_core::Denylist;
///
/// let denylist = Denylist::default();
/// assert!(denylist.contains("__proto__"));
/// assert!(denylist.contains("constructor"));
/// assert!(denylist.contains("prototype"));
/// assert!(!denylist.contains("__PROTO__"));
/// assert!(!denylist.contains("bio"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denylist {
    keys: BTreeSet<String>,
}

impl Denylist {
    /// Build a denylist from an arbitrary set of key names.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Denylist {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The process-wide stock denylist.
    ///
    /// Shared so hot paths do not rebuild the set on every call.
    pub fn standard() -> &'static Denylist {
        &STANDARD
    }

    /// Return a copy of this denylist with one more key added.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.insert(key.into());
        self
    }

    /// Whether `key` is denylisted. Exact, case-sensitive match.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Iterate the denylisted key names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of denylisted keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the denylist is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        STANDARD.clone()
    }
}
