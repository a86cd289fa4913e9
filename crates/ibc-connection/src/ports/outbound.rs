//! # Outbound Ports
//!
//! Traits for external dependencies: the execution context supplying store
//! access, commit verification, and vote signature checks.

use crate::domain::{
    Checkpoint, VerificationError, VerificationMode, VerificationOutcome, VotingPowerTally,
};
use ibc_typed_store::{InMemoryKVStore, KeyValueStore};
use shared_types::{Height, PublicKey, Signature};

/// Execution context handed to the handler for one message.
///
/// Provided by the execution engine. Fee accounting, transaction signing
/// and block lifecycle stay on the engine side.
pub trait ExecutionContext {
    /// Read access to the shared ledger store.
    fn store(&self) -> &dyn KeyValueStore;

    /// Write access to the shared ledger store.
    fn store_mut(&mut self) -> &mut dyn KeyValueStore;

    /// Height of the local block being executed.
    fn block_height(&self) -> Height;
}

/// Light-client verification - outbound port.
///
/// Implementations must be pure: the verdict depends only on the arguments,
/// so every replica reaches the same decision.
pub trait CommitVerifier {
    /// Check a root of trust supplied out of band.
    ///
    /// Only self-consistency is checked; there is nothing to verify it against.
    fn verify_root(&self, root: &Checkpoint) -> Result<VotingPowerTally, VerificationError>;

    /// Decide whether `candidate` may follow `trusted`.
    fn verify(
        &self,
        trusted: &Checkpoint,
        candidate: &Checkpoint,
    ) -> Result<VerificationOutcome, VerificationError>;
}

impl<V: CommitVerifier + ?Sized> CommitVerifier for &V {
    fn verify_root(&self, root: &Checkpoint) -> Result<VotingPowerTally, VerificationError> {
        (**self).verify_root(root)
    }

    fn verify(
        &self,
        trusted: &Checkpoint,
        candidate: &Checkpoint,
    ) -> Result<VerificationOutcome, VerificationError> {
        (**self).verify(trusted, candidate)
    }
}

/// Vote signature check - outbound port.
pub trait VoteSignatureVerifier {
    /// True iff `signature` by `pub_key` over `message` is valid.
    fn verify_vote(&self, pub_key: &PublicKey, message: &[u8], signature: &Signature) -> bool;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// In-memory execution context.
#[derive(Clone, Debug, Default)]
pub struct MockExecutionContext {
    /// Backing store.
    pub store: InMemoryKVStore,
    /// Local block height.
    pub block_height: Height,
}

impl MockExecutionContext {
    /// Empty store at local height 1.
    pub fn new() -> Self {
        Self {
            store: InMemoryKVStore::new(),
            block_height: 1,
        }
    }
}

impl ExecutionContext for MockExecutionContext {
    fn store(&self) -> &dyn KeyValueStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        &mut self.store
    }

    fn block_height(&self) -> Height {
        self.block_height
    }
}

/// Commit verifier with a scripted verdict.
///
/// Accepts any strictly higher candidate unless `reject` is set.
#[derive(Clone, Debug, Default)]
pub struct MockCommitVerifier {
    /// Error to return from every call.
    pub reject: Option<VerificationError>,
}

impl MockCommitVerifier {
    /// Verifier that rejects everything with `error`.
    pub fn rejecting(error: VerificationError) -> Self {
        Self {
            reject: Some(error),
        }
    }
}

impl CommitVerifier for MockCommitVerifier {
    fn verify_root(&self, _root: &Checkpoint) -> Result<VotingPowerTally, VerificationError> {
        match &self.reject {
            Some(err) => Err(err.clone()),
            None => Ok(VotingPowerTally::default()),
        }
    }

    fn verify(
        &self,
        trusted: &Checkpoint,
        candidate: &Checkpoint,
    ) -> Result<VerificationOutcome, VerificationError> {
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }
        if candidate.height() <= trusted.height() {
            return Err(VerificationError::HeightNotIncreasing {
                trusted: trusted.height(),
                candidate: candidate.height(),
            });
        }
        Ok(VerificationOutcome {
            trusted_height: trusted.height(),
            height: candidate.height(),
            mode: VerificationMode::SameValidators,
            commit_power: VotingPowerTally::default(),
        })
    }
}
