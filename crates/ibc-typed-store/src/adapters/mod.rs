//! # Adapters
//!
//! Implementations of the outbound ports.
//!
//! - `codec` - bincode (persisted state) and JSON (query output)
//! - `memory` - in-memory store
//! - `buffered` - write buffer flushed on success
//! - `rocksdb` - durable store (feature `rocksdb`)

pub mod buffered;
pub mod codec;
pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocksdb;

pub use buffered::BufferedStore;
pub use codec::{BincodeCodec, JsonCodec};
pub use memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::{RocksDbConfig, RocksDbStore};
