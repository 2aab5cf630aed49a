//! Record registry
//!
//! Name-keyed storage for every registered record. The registry owns the
//! record lifecycle: registration (duplicate names rejected), lookup, and
//! rename. Records are never deleted; a rename re-keys the entry but the
//! entity survives.
//!
//! # Thread Safety
//!
//! A single `parking_lot::RwLock` guards the map. Closure-based accessors
//! (`with_record`, `with_record_mut`) run under the lock, which keeps
//! merge-then-read sequences atomic per record without exposing guards.

use crate::record::Record;
use mergelab_core::{LabError, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Name-keyed record storage.
#[derive(Debug, Default)]
pub struct RecordRegistry {
    records: RwLock<FxHashMap<String, Record>>,
}

impl RecordRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        RecordRegistry {
            records: RwLock::new(FxHashMap::default()),
        }
    }

    /// Register a new record under `name`.
    ///
    /// Fails with [`LabError::DuplicateRecord`] when the name is taken.
    /// Names are exact strings; no trimming or case folding happens here.
    pub fn register(&self, name: &str) -> Result<()> {
        let mut records = self.records.write();
        if records.contains_key(name) {
            return Err(LabError::duplicate(name));
        }
        records.insert(name.to_string(), Record::new(name));
        tracing::debug!(target: "mergelab::engine", name, "record registered");
        Ok(())
    }

    /// Whether a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.read().contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Clone of the record named `name`, if registered.
    pub fn get(&self, name: &str) -> Option<Record> {
        self.records.read().get(name).cloned()
    }

    /// Run `f` against the record named `name` under the read lock.
    ///
    /// Fails with [`LabError::RecordNotFound`] when the name is unknown.
    pub fn with_record<R>(&self, name: &str, f: impl FnOnce(&Record) -> R) -> Result<R> {
        let records = self.records.read();
        let record = records.get(name).ok_or_else(|| LabError::not_found(name))?;
        Ok(f(record))
    }

    /// Run `f` against the record named `name` under the write lock.
    ///
    /// Fails with [`LabError::RecordNotFound`] when the name is unknown.
    pub fn with_record_mut<R>(&self, name: &str, f: impl FnOnce(&mut Record) -> R) -> Result<R> {
        let mut records = self.records.write();
        let record = records
            .get_mut(name)
            .ok_or_else(|| LabError::not_found(name))?;
        Ok(f(record))
    }

    /// Re-key the record `current` under `requested`.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` when `requested` is
    /// already taken (including the no-op case where both names are equal).
    /// Fails with [`LabError::RecordNotFound`] when `current` is unknown.
    /// The check and the re-key happen under one write lock.
    pub fn rename(&self, current: &str, requested: &str) -> Result<bool> {
        let mut records = self.records.write();
        if records.contains_key(requested) {
            if !records.contains_key(current) {
                return Err(LabError::not_found(current));
            }
            return Ok(false);
        }
        let Some(mut record) = records.remove(current) else {
            return Err(LabError::not_found(current));
        };
        record.set_name(requested);
        records.insert(requested.to_string(), record);
        tracing::info!(target: "mergelab::engine", from = current, to = requested, "record renamed");
        Ok(true)
    }
}
