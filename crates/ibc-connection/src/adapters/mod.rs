//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for commit verification.

pub mod quorum_verifier;
pub mod signature_verifier;

pub use quorum_verifier::QuorumVerifier;
pub use signature_verifier::Ed25519VoteVerifier;
