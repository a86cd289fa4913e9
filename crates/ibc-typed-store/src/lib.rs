//! # IBC Typed Store
//!
//! Strongly-typed access to a byte-oriented key-value store.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Connection state is persisted in the ledger's shared store, which only
//! understands bytes. This crate binds a key, a codec and a value type into a
//! [`TypedStore`] so that callers never handle raw bytes:
//!
//! | Operation | Reads | Writes | Absent key |
//! |-----------|-------|--------|------------|
//! | `has` | 1 | 0 | `false` |
//! | `get` | 1 | 0 | `None` |
//! | `must_get` | 1 | 0 | `StoreError::Missing` |
//! | `set` | 0 | 1 | creates |
//!
//! Undecodable bytes are always reported as `StoreError::Decode`, never
//! replaced by a default.
//!
//! ## Module Structure
//!
//! ```text
//! ibc-typed-store/
//! ├── domain/     # Error taxonomy
//! ├── ports/      # KeyValueStore and Codec traits
//! ├── adapters/   # Codecs, in-memory, buffered and RocksDB stores
//! └── typed.rs    # TypedStore
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod typed;

// Re-exports
pub use adapters::{BincodeCodec, BufferedStore, InMemoryKVStore, JsonCodec};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbStore};
pub use domain::{CodecError, KVStoreError, StoreError};
pub use ports::{BatchOperation, Codec, KeyValueStore};
pub use typed::TypedStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
