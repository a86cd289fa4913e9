//! # IBC Connection Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Deterministic validators, signed checkpoints, messages
//! │
//! ├── exploits/         # Attack simulations against the light client
//! │   ├── replay.rs     # Stale and replayed commits
//! │   ├── forgery.rs    # Forged, duplicated and borrowed signatures
//! │   ├── corruption.rs # Damaged persistent state
//! │   └── isolation.rs  # Cross-chain key isolation
//! │
//! └── integration/      # Handler + registry + verifier + store
//!     ├── lifecycle.rs  # Open / update flows
//!     ├── properties.rs # Property-based state machine checks
//!     └── durable.rs    # RocksDB-backed persistence
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ibc-tests
//!
//! # By category
//! cargo test -p ibc-tests integration::
//! cargo test -p ibc-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p ibc-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod exploits;
