//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Chain identifier was empty.
    #[error("Chain identifier must not be empty")]
    Empty,

    /// Chain identifier exceeds the maximum length.
    #[error("Chain identifier too long: {len} > {max}")]
    TooLong { len: usize, max: usize },

    /// Chain identifier contains a character outside `[A-Za-z0-9._-]`.
    #[error("Chain identifier {id:?} contains invalid character {character:?}")]
    InvalidCharacter { id: String, character: char },

    /// Address was not 20 hex-encoded bytes.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
