//! # Domain Errors
//!
//! Error types for the typed store.
//!
//! ## Design Principles
//!
//! - Backend failures, codec failures and missing values are distinct variants
//! - Decode failures always carry the offending key (they signal corruption)
//! - No panics in store logic (use Result instead)

use thiserror::Error;

/// Errors reported by a byte-oriented key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError {
        /// Backend error description
        message: String,
    },

    /// Backend detected corruption in its own files.
    #[error("KV store corruption: {message}")]
    CorruptionError {
        /// Backend error description
        message: String,
    },
}

/// Errors reported by a codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Value could not be encoded.
    #[error("Encode failed: {message}")]
    Encode {
        /// Serializer error description
        message: String,
    },

    /// Bytes could not be decoded into the requested type.
    #[error("Decode failed: {message}")]
    Decode {
        /// Deserializer error description
        message: String,
    },
}

/// Errors raised by [`TypedStore`](crate::TypedStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Stored bytes could not be decoded (store corruption).
    #[error("Corrupt value at key {key:?}: {message}")]
    Decode {
        /// Printable form of the store key
        key: String,
        /// Codec error description
        message: String,
    },

    /// Value could not be encoded; the store was not touched.
    #[error("Cannot encode value for key {key:?}: {message}")]
    Encode {
        /// Printable form of the store key
        key: String,
        /// Codec error description
        message: String,
    },

    /// A value required to exist was absent.
    #[error("Missing value at key {key:?}")]
    Missing {
        /// Printable form of the store key
        key: String,
    },

    /// The backend failed.
    #[error(transparent)]
    Backend(#[from] KVStoreError),
}

impl StoreError {
    /// Returns true if this error means stored state cannot be trusted.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            StoreError::Decode { .. }
                | StoreError::Missing { .. }
                | StoreError::Backend(KVStoreError::CorruptionError { .. })
        )
    }
}

/// Render a store key for diagnostics.
pub(crate) fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}
