//! # IBC Connection
//!
//! Cross-chain connections with light-client commit verification.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Lets the local ledger hold a verifiable trust relationship with a remote
//! chain. A connection is opened from a root of trust and then advanced one
//! commit at a time; each commit must be signed by enough of the voting power
//! the connection already trusts.
//!
//! ## Security
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Height monotonicity | Updates must strictly increase the trusted height |
//! | Quorum check | More than 2/3 of the signing set, and more than the trust threshold of the trusted set on transitions |
//! | Signature re-verification | Every listed signer's Ed25519 signature is checked |
//! | Append-only history | A stored checkpoint is never overwritten |
//! | All-or-nothing writes | Rejected messages leave the store byte-for-byte unchanged |
//!
//! ## Module Structure
//!
//! ```text
//! ibc-connection/
//! ├── domain/          # Checkpoints, validator sets, errors, invariants
//! ├── algorithms/      # Structural validation, voting power, verification
//! ├── events/          # Consumed messages and published events
//! ├── ports/           # API traits (inbound) + dependency traits (outbound)
//! ├── adapters/        # Ed25519 signatures, quorum verifier
//! ├── application/     # Registry, handler, queries
//! ├── config.rs        # ConnectionConfig
//! └── metrics.rs       # Prometheus counters (feature `metrics`)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;

// Re-exports
pub use adapters::{Ed25519VoteVerifier, QuorumVerifier};
pub use algorithms::{validate_checkpoint, verify_commit, verify_root_of_trust};
pub use application::{ConnectionHandler, ConnectionQuerier, ConnectionRegistry, ConnectionRuntime};
pub use config::ConnectionConfig;
pub use domain::{
    CanonicalVote, Checkpoint, Commit, CommitSig, ConnectionError, ConnectionState,
    ConnectionStatus, Header, SignedHeader, TrustThreshold, Validator, ValidatorSet,
    VerificationError, VerificationMode, VerificationOutcome, VotingPowerTally, CODESPACE,
};
pub use events::{
    ConnectionEvent, ConnectionMsg, Msg, MsgOpenConnection, MsgUpdateConnection, RawMessage,
};
pub use ports::{
    CommitVerifier, ConnectionApi, ConnectionQueryApi, ExecutionContext, HandlerResponse,
    MockCommitVerifier, MockExecutionContext, VoteSignatureVerifier,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
