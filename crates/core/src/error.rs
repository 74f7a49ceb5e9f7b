//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in the catalog is a rejected argument: a missing or empty
/// required value, a duplicate identifier on insert, or an unknown identifier on
/// update. Lookups that find nothing are not errors and return `None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was missing, empty, or referred to a state that does not allow
    /// the operation (e.g. duplicate or unknown identifier).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) => msg,
        }
    }
}
