//! Public types for the mergelab unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core value model and tree algorithms
pub use mergelab_core::{deep_merge, deep_merge_map, sanitize, sanitize_map, AttrMap};

// Structural-key denylist
pub use mergelab_core::{Denylist, DEFAULT_STRUCTURAL_KEYS};

// Error kinds shared by every layer
pub use mergelab_core::{LabError, Result};

// Truthiness and input coercion helpers
pub use mergelab_core::{as_object_input, is_truthy};

// Stateful engine pieces
pub use mergelab_engine::{AttributeStore, MergeEngine, MergePolicy, Record, RecordRegistry};

// Two-tier view resolution
pub use mergelab_engine::{effective_get, effective_view};

// Service facades
pub use mergelab_service::{
    CredentialStore, FileStore, Message, MessageBoard, ProfileService, SessionStore, StoredFile,
    DEMO_RECORD, RECENT_LIMIT,
};
