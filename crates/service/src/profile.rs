//! Profile service
//!
//! The user-facing facade over the registry, the merge engine, and the
//! shared default store. HTTP handlers call this and nothing below it.
//!
//! # Design
//!
//! - Holds `Arc`s to the registry and store so the HTTP state, background
//!   tasks, and tests can share the same instances.
//! - The merge policy is an argument to [`ProfileService::update_profile`],
//!   not service state: one process serves exactly one policy, but the
//!   caller (server config) owns that decision.
//! - A demo record named [`DEMO_RECORD`] is registered at construction so a
//!   fresh deployment has something to pollute and something to observe.

use mergelab_core::{as_object_input, is_truthy, AttrMap, LabError, Result};
use mergelab_engine::{effective_get, effective_view, AttributeStore, MergeEngine, MergePolicy, RecordRegistry};
use serde_json::Value;
use std::sync::Arc;

/// Name of the record every deployment starts with.
pub const DEMO_RECORD: &str = "guest";

/// Registration, update, view, and authorization workflows over records.
#[derive(Debug, Clone)]
pub struct ProfileService {
    registry: Arc<RecordRegistry>,
    store: Arc<AttributeStore>,
    engine: MergeEngine,
}

impl ProfileService {
    /// Create a service over shared registry and store instances.
    ///
    /// Registers the demo record with an empty bio if it is not already
    /// present.
    pub fn new(registry: Arc<RecordRegistry>, store: Arc<AttributeStore>) -> Self {
        Self::with_engine(registry, store, MergeEngine::new())
    }

    /// Create a service with a caller-supplied merge engine.
    pub fn with_engine(
        registry: Arc<RecordRegistry>,
        store: Arc<AttributeStore>,
        engine: MergeEngine,
    ) -> Self {
        let service = ProfileService {
            registry,
            store,
            engine,
        };
        service.ensure_demo_record();
        service
    }

    fn ensure_demo_record(&self) {
        if self.registry.contains(DEMO_RECORD) {
            return;
        }
        let mut initial = AttrMap::new();
        initial.insert("bio".to_string(), Value::String(String::new()));
        if let Err(err) = self.register(DEMO_RECORD, initial) {
            tracing::debug!(target: "mergelab::service", %err, "demo record already present");
        }
    }

    /// Register a new record.
    ///
    /// Initial attributes go through the guarded path regardless of the
    /// deployment policy: registration input is trusted nowhere.
    ///
    /// # Arguments
    ///
    /// * `name` - exact record name; no trimming happens at this layer
    /// * `initial` - starting own attributes, sanitized before storage
    ///
    /// # Returns
    ///
    /// `Err(DuplicateRecord)` when the name is taken.
    pub fn register(&self, name: &str, initial: AttrMap) -> Result<()> {
        self.registry.register(name)?;
        if !initial.is_empty() {
            self.registry.with_record_mut(name, |record| {
                self.engine
                    .apply(MergePolicy::Guarded, record.attrs_mut(), &self.store, initial);
            })?;
        }
        tracing::info!(target: "mergelab::service", name, "profile registered");
        Ok(())
    }

    /// Apply an update payload to a record under the given policy.
    ///
    /// The payload must be a JSON object; anything else fails with
    /// `InvalidInput` before any state changes. On the unguarded path a
    /// denylisted structural key in the payload is redirected into the
    /// shared store, which is the whole point of this lab.
    ///
    /// # Returns
    ///
    /// The record's effective view after the merge.
    pub fn update_profile(&self, name: &str, input: Value, policy: MergePolicy) -> Result<AttrMap> {
        let input = as_object_input(input)?;
        tracing::debug!(
            target: "mergelab::service",
            name,
            %policy,
            keys = input.len(),
            "applying profile update"
        );
        self.registry.with_record_mut(name, |record| {
            self.engine
                .apply(policy, record.attrs_mut(), &self.store, input);
        })?;
        self.effective_view(name)
    }

    /// The record's effective view: shared defaults overlaid by own attrs.
    pub fn effective_view(&self, name: &str) -> Result<AttrMap> {
        self.registry
            .with_record(name, |record| effective_view(record.attrs(), &self.store))
    }

    /// Resolve one attribute through the two tiers.
    pub fn effective_attr(&self, name: &str, key: &str) -> Result<Option<Value>> {
        self.registry
            .with_record(name, |record| effective_get(record.attrs(), &self.store, key))
    }

    /// Whether the record's effective value for `capability` is truthy.
    ///
    /// Missing records and missing attributes are both plain denials, never
    /// errors: the caller gets `false` and the request flow decides how to
    /// phrase the refusal.
    pub fn is_authorized(&self, name: &str, capability: &str) -> bool {
        match self.effective_attr(name, capability) {
            Ok(Some(value)) => is_truthy(&value),
            _ => false,
        }
    }

    /// [`Self::is_authorized`] as a hard check.
    ///
    /// # Returns
    ///
    /// `Err(Unauthorized)` carrying the capability name when the check
    /// fails.
    pub fn authorize(&self, name: &str, capability: &str) -> Result<()> {
        if self.is_authorized(name, capability) {
            Ok(())
        } else {
            Err(LabError::unauthorized(capability))
        }
    }

    /// Rename a record, with the forgiving semantics of a profile form.
    ///
    /// The requested name is trimmed. An empty result, the current name, or
    /// a name already taken all turn the rename into a silent no-op. On
    /// success the record's `username` attribute is updated to match.
    ///
    /// # Returns
    ///
    /// `Ok(Some(new_name))` when a rename happened, `Ok(None)` on a no-op,
    /// `Err(RecordNotFound)` when `current` is unknown.
    pub fn rename(&self, current: &str, requested: &str) -> Result<Option<String>> {
        let requested = requested.trim();
        if requested.is_empty() || requested == current {
            return Ok(None);
        }
        if !self.registry.rename(current, requested)? {
            tracing::debug!(
                target: "mergelab::service",
                current,
                requested,
                "rename skipped, name taken"
            );
            return Ok(None);
        }
        let new_name = requested.to_string();
        self.registry.with_record_mut(&new_name, |record| {
            record
                .attrs_mut()
                .insert("username".to_string(), Value::String(new_name.clone()));
        })?;
        Ok(Some(new_name))
    }

    /// Whether a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// All registered record names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }
}
