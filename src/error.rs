//! Error types.
//!
//! Only configuration and input problems are reported through [`GaError`].
//! Deserialized genomes are checked here too, since they arrive as input.
//! A genome that stops being a permutation is a programming error and
//! panics at the operator that produced it.

/// Errors reported to callers of this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A run parameter or the point set is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An order handed to a genome is not a permutation of `0..len`.
    #[error("order is not a permutation: {0:?}")]
    InvalidPermutation(Vec<usize>),

    /// A point list could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Shorthand for results carrying a [`GaError`].
pub type Result<T> = std::result::Result<T, GaError>;
