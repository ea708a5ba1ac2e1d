//! Error types for the Greeting Ledger core.

use thiserror::Error;

/// Validation errors for text, principals, and set membership.
///
/// These cover every `InvalidInput` failure in the ledger. Validation runs
/// before any store is touched, so a validation error never leaves partial
/// state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be {min}-{max} bytes, got {len}")]
    TextLength {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{0} must not be the null principal")]
    NullPrincipal(&'static str),

    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}
