//! Error handling for the Mega Sena engine.

pub mod domain;

pub use domain::{DomainError, InfraErrorKind, ValidationKind};
