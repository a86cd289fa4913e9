//! # Ports Module
//!
//! Outbound dependencies of the typed store.

pub mod outbound;

pub use outbound::*;
