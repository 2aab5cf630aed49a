//! mergelab - a deliberately vulnerable deep-merge profile service
//!
//! This workspace demonstrates how a recursive merge that treats structural
//! keys as routable can turn one user's update into everyone's defaults:
//! - `mergelab-core`: value model, denylist, pure merge and sanitize walks
//! - `mergelab-engine`: shared default store, record registry, policy-mode
//!   merge engine, two-tier view resolution
//! - `mergelab-service`: profile workflows plus sessions, credentials,
//!   guestbook, and uploads
//! - `mergelab-http`: the axum daemon exposing the lab over HTTP
//!
//! The root crate is a facade: it re-exports the pieces needed to drive the
//! lab from Rust, which is exactly what the workspace-level integration
//! tests do.
//!
//! # Example
//!
//! ```
//! use mergelab::{AttributeStore, MergePolicy, ProfileService, RecordRegistry};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let store = Arc::new(AttributeStore::new());
//! let service = ProfileService::new(Arc::new(RecordRegistry::new()), Arc::clone(&store));
//!
//! service.register("alice", Default::default()).unwrap();
//! service.register("bob", Default::default()).unwrap();
//!
//! // One unguarded update...
//! service
//!     .update_profile("alice", json!({"__proto__": {"isAdmin": true}}), MergePolicy::Unguarded)
//!     .unwrap();
//!
//! // ...and an untouched record is authorized.
//! assert!(service.is_authorized("bob", "isAdmin"));
//! ```

pub mod types;

pub use types::*;
