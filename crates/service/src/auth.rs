//! Credential store
//!
//! Username-to-digest storage backing login. Passwords are hashed with
//! SHA-256 before storage; verification compares digests. This is a lab,
//! not a password vault: no salting, no KDF work factor.

use mergelab_core::{LabError, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};

/// Username-keyed password digests.
#[derive(Debug, Default)]
pub struct CredentialStore {
    creds: RwLock<FxHashMap<String, String>>,
}

impl CredentialStore {
    /// Create an empty credential store.
    pub fn new() -> Self {
        CredentialStore {
            creds: RwLock::new(FxHashMap::default()),
        }
    }

    /// Store credentials for a new username.
    ///
    /// Fails with [`LabError::DuplicateRecord`] when credentials already
    /// exist for `username`.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let mut creds = self.creds.write();
        if creds.contains_key(username) {
            return Err(LabError::duplicate(username));
        }
        creds.insert(username.to_string(), digest(password));
        Ok(())
    }

    /// Whether the supplied password matches the stored digest.
    ///
    /// Unknown usernames verify as `false`; callers cannot distinguish a
    /// missing account from a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.creds
            .read()
            .get(username)
            .map(|stored| *stored == digest(password))
            .unwrap_or(false)
    }

    /// Whether credentials exist for `username`.
    pub fn contains(&self, username: &str) -> bool {
        self.creds.read().contains_key(username)
    }

    /// Move credentials to a new username after a record rename.
    ///
    /// Returns `false` when `old` has no credentials or `new` already has
    /// some.
    pub fn rename_user(&self, old: &str, new: &str) -> bool {
        let mut creds = self.creds.write();
        if creds.contains_key(new) {
            return false;
        }
        match creds.remove(old) {
            Some(stored) => {
                creds.insert(new.to_string(), stored);
                true
            }
            None => false,
        }
    }
}

fn digest(password: &str) -> String {
    let hash = Sha256::digest(password.as_bytes());
    hash.iter().map(|byte| format!("{byte:02x}")).collect()
}
