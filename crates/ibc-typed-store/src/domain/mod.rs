//! # Domain Module
//!
//! Error taxonomy for the typed store.

pub mod errors;

pub use errors::*;
