//! # Core Identifiers
//!
//! Types shared by the typed store and the connection subsystem.
//!
//! ## Clusters
//!
//! - **Crypto**: `Hash`, `PublicKey`, `Signature`
//! - **Chain**: `Height`, `ChainId`
//! - **Accounts**: `Address`

use crate::errors::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: CRYPTO
// =============================================================================

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// A 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

// =============================================================================
// CLUSTER B: CHAIN
// =============================================================================

/// Block height on a remote chain. Height 0 is never a committed height.
pub type Height = u64;

/// Maximum length of a chain identifier, in bytes.
pub const MAX_CHAIN_ID_LEN: usize = 64;

/// Identifier of a remote chain.
///
/// Restricted to `[A-Za-z0-9._-]` so that it can be embedded in store keys
/// without escaping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    /// Validate and wrap a chain identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        if id.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if id.len() > MAX_CHAIN_ID_LEN {
            return Err(IdentifierError::TooLong {
                len: id.len(),
                max: MAX_CHAIN_ID_LEN,
            });
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(IdentifierError::InvalidCharacter { id, character: c });
        }
        Ok(Self(id))
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl AsRef<str> for ChainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// CLUSTER C: ACCOUNTS
// =============================================================================

/// A 20-byte account address identifying the signer of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| IdentifierError::InvalidAddress(e.to_string()))?;
        let raw: [u8; 20] = bytes.try_into().map_err(|b: Vec<u8>| {
            IdentifierError::InvalidAddress(format!("expected 20 bytes, got {}", b.len()))
        })?;
        Ok(Self(raw))
    }
}

impl From<[u8; 20]> for Address {
    fn from(raw: [u8; 20]) -> Self {
        Self(raw)
    }
}
