//! Domain-level error type used across services and the store.
//!
//! There are no fatal conditions in the core: validation failures are
//! reported to the caller as structured values, and store failures are
//! recovered locally by the service layer (defaults on read, logged and
//! swallowed on write).

use thiserror::Error;

/// Validation failure kinds for user-supplied number sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Not exactly six numbers.
    WrongCount,
    /// The same number appears more than once.
    DuplicateNumber,
    /// A number falls outside the board range.
    OutOfRange,
}

/// Infra error kinds to distinguish operational store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Io,
    Serialization,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure, recovered by the caller.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Operational failure in the persistence layer.
    #[error("infra error {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
