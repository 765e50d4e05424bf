//! Store error types.

use thiserror::Error;

use crate::schema::SchemaViolation;

/// Student store operation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Payload does not satisfy a schema
    #[error("Payload does not match schema '{schema}' ({} violation(s))", .violations.len())]
    Validation {
        schema: &'static str,
        violations: Vec<SchemaViolation>,
    },

    /// Subjects supplied at creation time
    #[error("Subjects cannot be set when creating a student")]
    SubjectsNotAllowed,

    /// Update payload names no updatable field
    #[error("Request body contains no valid field to update")]
    NoValidField,

    /// Student not found
    #[error("Student '{id}' not found")]
    NotFound { id: String },

    /// Student exists but has no subjects registered
    #[error("Student '{id}' has no subjects registered")]
    NoSubjects { id: String },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Coarse classification of a `StoreError`, used by transport adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Payload failed a schema or key-level rule
    Validation,
    /// Referenced id is absent
    NotFound,
    /// Referenced id is present but the requested sub-collection is empty
    EmptyResource,
    /// Store is in an unusable state
    Internal,
}

impl StoreError {
    /// Returns the error class for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation { .. }
            | StoreError::SubjectsNotAllowed
            | StoreError::NoValidField => ErrorKind::Validation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::NoSubjects { .. } => ErrorKind::EmptyResource,
            StoreError::LockPoisoned => ErrorKind::Internal,
        }
    }

    /// Returns the schema violations carried by this error, if any.
    pub fn violations(&self) -> Option<&[SchemaViolation]> {
        match self {
            StoreError::Validation { violations, .. } => Some(violations),
            _ => None,
        }
    }

    pub(crate) fn not_found(id: &str) -> Self {
        StoreError::NotFound { id: id.to_string() }
    }
}
