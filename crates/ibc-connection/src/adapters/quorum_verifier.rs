//! Quorum Verifier Adapter
//!
//! Default `CommitVerifier`: trust-threshold validator-set verification over
//! Ed25519 vote signatures.

use crate::adapters::signature_verifier::Ed25519VoteVerifier;
use crate::algorithms::{verify_commit, verify_root_of_trust};
use crate::config::ConnectionConfig;
use crate::domain::{
    Checkpoint, TrustThreshold, VerificationError, VerificationOutcome, VotingPowerTally,
};
use crate::ports::outbound::{CommitVerifier, VoteSignatureVerifier};

/// Commit verifier enforcing voting-power quorums.
#[derive(Clone, Debug)]
pub struct QuorumVerifier<S = Ed25519VoteVerifier> {
    trust_threshold: TrustThreshold,
    max_validators: usize,
    signatures: S,
}

impl QuorumVerifier<Ed25519VoteVerifier> {
    /// Ed25519 verifier with the thresholds from `config`.
    pub fn from_config(config: &ConnectionConfig) -> Self {
        Self::with_signature_verifier(config, Ed25519VoteVerifier::new())
    }
}

impl Default for QuorumVerifier<Ed25519VoteVerifier> {
    fn default() -> Self {
        Self::from_config(&ConnectionConfig::default())
    }
}

impl<S: VoteSignatureVerifier> QuorumVerifier<S> {
    /// Verifier using a custom signature scheme.
    pub fn with_signature_verifier(config: &ConnectionConfig, signatures: S) -> Self {
        Self {
            trust_threshold: config.trust_threshold,
            max_validators: config.max_validators,
            signatures,
        }
    }

    /// Threshold applied to validator-set transitions.
    pub fn trust_threshold(&self) -> TrustThreshold {
        self.trust_threshold
    }
}

impl<S: VoteSignatureVerifier> CommitVerifier for QuorumVerifier<S> {
    fn verify_root(&self, root: &Checkpoint) -> Result<VotingPowerTally, VerificationError> {
        verify_root_of_trust(root, self.max_validators, &self.signatures)
    }

    fn verify(
        &self,
        trusted: &Checkpoint,
        candidate: &Checkpoint,
    ) -> Result<VerificationOutcome, VerificationError> {
        verify_commit(
            trusted,
            candidate,
            self.trust_threshold,
            self.max_validators,
            &self.signatures,
        )
    }
}
