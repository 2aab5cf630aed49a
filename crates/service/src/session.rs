//! Session store
//!
//! Opaque bearer tokens mapped to record names. Tokens are random v4 UUIDs;
//! nothing about a session is derived from the record, so renames have to
//! be propagated explicitly with [`SessionStore::rename_user`].

use dashmap::DashMap;
use uuid::Uuid;

/// Token-to-username session storage.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, String>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        SessionStore {
            sessions: DashMap::new(),
        }
    }

    /// Open a session for `username` and return the fresh token.
    pub fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), username.to_string());
        tracing::debug!(target: "mergelab::service", username, "session created");
        token
    }

    /// Resolve a token to its username.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Destroy a session. Returns whether the token existed.
    pub fn destroy(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Point every session of `old` at `new` after a record rename.
    pub fn rename_user(&self, old: &str, new: &str) {
        for mut entry in self.sessions.iter_mut() {
            if entry.value() == old {
                *entry.value_mut() = new.to_string();
            }
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
