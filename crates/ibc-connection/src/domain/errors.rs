//! # Domain Errors
//!
//! Error types for cross-chain connections.
//!
//! ## Taxonomy
//!
//! | Kind | Variants | Effect |
//! |------|----------|--------|
//! | Rejection | `InvalidHeight`, `ConnectionAlreadyEstablished`, `ConnectionNotEstablished`, `UnknownMessageType`, `InvalidMessage` | message refused, state untouched |
//! | Adversarial | `Verification(..)` | message refused, state untouched |
//! | Fatal | `Store(..)`, `MissingCheckpoint`, `CheckpointOverwrite` | stored state cannot be trusted |

use ibc_typed_store::StoreError;
use shared_types::{ChainId, Height};
use thiserror::Error;

/// Codespace reported alongside every error code.
pub const CODESPACE: &str = "ibc";

/// Rejections produced by light-client verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Candidate does not advance past the trusted checkpoint.
    #[error("Height not increasing: trusted {trusted}, candidate {candidate}")]
    HeightNotIncreasing {
        /// Height of the trusted checkpoint
        trusted: Height,
        /// Height of the candidate
        candidate: Height,
    },

    /// Signed voting power does not exceed the required fraction.
    #[error("Quorum not met: {signed}/{total} voting power signed, need more than {numerator}/{denominator}")]
    QuorumNotMet {
        /// Voting power that signed
        signed: u64,
        /// Total voting power of the set
        total: u64,
        /// Threshold numerator
        numerator: u64,
        /// Threshold denominator
        denominator: u64,
    },

    /// The checkpoint is structurally invalid or carries a bad signature.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),
}

impl VerificationError {
    /// Stable label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationError::HeightNotIncreasing { .. } => "height_not_increasing",
            VerificationError::QuorumNotMet { .. } => "quorum_not_met",
            VerificationError::MalformedProof(_) => "malformed_proof",
        }
    }
}

/// Errors returned by the connection handler, registry and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Stored state could not be read or decoded.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Message height is zero or does not advance the connection.
    #[error("Invalid height {height}: {reason}")]
    InvalidHeight {
        /// Offending height
        height: Height,
        /// What was expected
        reason: String,
    },

    /// `OpenConnection` for a chain that already has a connection.
    #[error("Connection already established for chain {chain_id}")]
    ConnectionAlreadyEstablished {
        /// Remote chain
        chain_id: ChainId,
    },

    /// `UpdateConnection` for a chain with no connection.
    #[error("Connection not established for chain {chain_id}")]
    ConnectionNotEstablished {
        /// Remote chain
        chain_id: ChainId,
    },

    /// Message type not handled by this module.
    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),

    /// Known message type whose body could not be decoded.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Light-client verification rejected the candidate.
    #[error("Verification failed: {0}")]
    Verification(#[from] VerificationError),

    /// A checkpoint already exists at this height (append-only history).
    #[error("Checkpoint already stored for chain {chain_id} at height {height}")]
    CheckpointOverwrite {
        /// Remote chain
        chain_id: ChainId,
        /// Height already present
        height: Height,
    },

    /// An established connection has no checkpoint at its latest height.
    #[error("Missing checkpoint for chain {chain_id} at height {height}")]
    MissingCheckpoint {
        /// Remote chain
        chain_id: ChainId,
        /// Height recorded as latest
        height: Height,
    },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConnectionError {
    /// Stable numeric code within [`CODESPACE`].
    pub fn code(&self) -> u32 {
        match self {
            ConnectionError::Store(_) => 1,
            ConnectionError::InvalidHeight { .. } => 2,
            ConnectionError::ConnectionAlreadyEstablished { .. } => 3,
            ConnectionError::ConnectionNotEstablished { .. } => 4,
            ConnectionError::UnknownMessageType(_) => 5,
            ConnectionError::InvalidMessage(_) => 6,
            ConnectionError::Verification(VerificationError::HeightNotIncreasing { .. }) => 7,
            ConnectionError::Verification(VerificationError::QuorumNotMet { .. }) => 8,
            ConnectionError::Verification(VerificationError::MalformedProof(_)) => 9,
            ConnectionError::CheckpointOverwrite { .. } => 10,
            ConnectionError::MissingCheckpoint { .. } => 11,
            ConnectionError::InvalidConfig(_) => 12,
        }
    }

    /// Codespace of [`code`](Self::code).
    pub fn codespace(&self) -> &'static str {
        CODESPACE
    }

    /// Returns true if the error means stored state cannot be trusted.
    ///
    /// Everything else is a rejection of the message itself.
    pub fn is_fatal(&self) -> bool {
        match self {
            ConnectionError::Store(e) => e.is_corruption(),
            ConnectionError::MissingCheckpoint { .. } | ConnectionError::CheckpointOverwrite { .. } => {
                true
            }
            _ => false,
        }
    }

    /// Stable label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionError::Store(_) => "store",
            ConnectionError::InvalidHeight { .. } => "invalid_height",
            ConnectionError::ConnectionAlreadyEstablished { .. } => "already_established",
            ConnectionError::ConnectionNotEstablished { .. } => "not_established",
            ConnectionError::UnknownMessageType(_) => "unknown_message_type",
            ConnectionError::InvalidMessage(_) => "invalid_message",
            ConnectionError::Verification(e) => e.label(),
            ConnectionError::CheckpointOverwrite { .. } => "checkpoint_overwrite",
            ConnectionError::MissingCheckpoint { .. } => "missing_checkpoint",
            ConnectionError::InvalidConfig(_) => "invalid_config",
        }
    }
}
