//! Core types and tree algorithms for the mergelab workspace
//!
//! This crate is dependency-light and policy-light: it defines the shared
//! attribute-value model, the error kinds, the structural-key denylist, and
//! the two pure tree walks everything else composes:
//! - [`merge::deep_merge`]: recursive last-writer-wins merge
//! - [`sanitize::sanitize`]: recursive denylisted-key removal
//!
//! Stateful concerns (the shared default store, the record registry, policy
//! modes) live in `mergelab-engine`; user-facing workflows live in
//! `mergelab-service`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod denylist;
pub mod error;
pub mod merge;
pub mod sanitize;
pub mod value;

pub use denylist::{Denylist, DEFAULT_STRUCTURAL_KEYS};
pub use error::{LabError, Result};
pub use merge::{deep_merge, deep_merge_map};
pub use sanitize::{contains_denylisted, sanitize, sanitize_map};
pub use value::{as_object_input, is_truthy, json_kind, AttrMap};
