//! Stateful merge engine for the mergelab workspace
//!
//! This crate holds everything with a lock in it:
//! - [`store::AttributeStore`]: the process-wide shared default mapping
//! - [`registry::RecordRegistry`]: name-keyed record storage with
//!   register/rename lifecycle
//! - [`merge::MergeEngine`]: guarded and unguarded update application
//! - [`view`]: two-tier effective-attribute resolution
//!
//! The pure tree algorithms these compose live in `mergelab-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod merge;
pub mod record;
pub mod registry;
pub mod store;
pub mod view;

pub use merge::{MergeEngine, MergePolicy};
pub use record::Record;
pub use registry::RecordRegistry;
pub use store::AttributeStore;
pub use view::{effective_get, effective_view};
