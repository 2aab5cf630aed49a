//! Error types shared across the mergelab workspace
//!
//! Every fallible operation in the registry, merge engine, and profile
//! service reports one of the [`LabError`] kinds. The HTTP layer owns the
//! mapping from these kinds onto wire status codes; nothing in this crate
//! knows about transports.

use thiserror::Error;

/// Errors surfaced by record and profile operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabError {
    /// Registration was attempted under a name that is already taken.
    #[error("record '{name}' already exists")]
    DuplicateRecord {
        /// Name that collided with an existing record.
        name: String,
    },

    /// An operation addressed a record name that was never registered.
    #[error("record '{name}' not found")]
    RecordNotFound {
        /// Name that failed to resolve.
        name: String,
    },

    /// Caller-supplied data did not have the required shape.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// A capability check failed for the acting record.
    #[error("not authorized for capability '{capability}'")]
    Unauthorized {
        /// Capability that was required and not held.
        capability: String,
    },
}

impl LabError {
    /// Construct a [`LabError::DuplicateRecord`] for `name`.
    pub fn duplicate(name: impl Into<String>) -> Self {
        LabError::DuplicateRecord { name: name.into() }
    }

    /// Construct a [`LabError::RecordNotFound`] for `name`.
    pub fn not_found(name: impl Into<String>) -> Self {
        LabError::RecordNotFound { name: name.into() }
    }

    /// Construct a [`LabError::InvalidInput`] with `reason`.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LabError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Construct a [`LabError::Unauthorized`] for `capability`.
    pub fn unauthorized(capability: impl Into<String>) -> Self {
        LabError::Unauthorized {
            capability: capability.into(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LabError>;
