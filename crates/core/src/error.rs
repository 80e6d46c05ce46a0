//! Domain and storage error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by every store port operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Absence of a record is not an error here: lookups return `Option`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty required field).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Failure of the storage layer itself.
///
/// An in-memory store only hits this on a poisoned lock; a persistent adapter
/// maps its I/O failures here. The boundary turns it into a 5xx response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Reject an empty required field.
///
/// Only the empty string fails; whitespace is stored verbatim.
pub fn require_non_empty(field: &'static str, value: String) -> DomainResult<String> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} required")));
    }
    Ok(value)
}
