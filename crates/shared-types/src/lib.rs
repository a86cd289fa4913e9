//! # Shared Types Crate
//!
//! Identifiers used by both the typed store and the connection subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `ChainId`, `Height` and `Address` are defined
//!   once and reused by every crate in the workspace.
//! - **Validated on construction**: a `ChainId` that exists is always safe to
//!   embed in a store key.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
