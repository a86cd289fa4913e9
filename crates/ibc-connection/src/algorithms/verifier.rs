//! # Commit Verification
//!
//! Decides whether a candidate checkpoint may follow a trusted one.
//!
//! ## Algorithm
//!
//! 1. Candidate height must exceed the trusted height.
//! 2. Candidate must be structurally valid and from the same chain.
//! 3. If the candidate is signed by the set the trusted checkpoint announced
//!    as next, more than 2/3 of that set's power must have signed.
//! 4. Otherwise the candidate's signers must hold more than the trust
//!    threshold of the trusted next set, and more than 2/3 of the
//!    candidate's own set.
//!
//! Pure: no I/O, no clocks, no randomness.

use super::validation::{validate_checkpoint, validate_validator_set};
use super::voting_power::{check_quorum, collect_valid_signers, tally_voting_power};
use crate::domain::{
    Checkpoint, TrustThreshold, VerificationError, VerificationMode, VerificationOutcome,
    VotingPowerTally,
};
use crate::ports::outbound::VoteSignatureVerifier;

/// Verify a root of trust on its own terms.
///
/// Structure must be valid and more than 2/3 of its validators must have
/// signed.
pub fn verify_root_of_trust<S: VoteSignatureVerifier + ?Sized>(
    root: &Checkpoint,
    max_validators: usize,
    verifier: &S,
) -> Result<VotingPowerTally, VerificationError> {
    validate_checkpoint(root, max_validators)?;

    let signers = collect_valid_signers(
        root.commit(),
        &root.sign_bytes(),
        &[&root.validators],
        verifier,
    )?;
    let tally = tally_voting_power(&root.validators, &signers)?;
    check_quorum(tally, TrustThreshold::TWO_THIRDS)?;
    Ok(tally)
}

/// Verify `candidate` against `trusted`.
pub fn verify_commit<S: VoteSignatureVerifier + ?Sized>(
    trusted: &Checkpoint,
    candidate: &Checkpoint,
    trust_threshold: TrustThreshold,
    max_validators: usize,
    verifier: &S,
) -> Result<VerificationOutcome, VerificationError> {
    if candidate.height() <= trusted.height() {
        return Err(VerificationError::HeightNotIncreasing {
            trusted: trusted.height(),
            candidate: candidate.height(),
        });
    }

    validate_checkpoint(candidate, max_validators)?;
    if candidate.chain_id() != trusted.chain_id() {
        return Err(VerificationError::MalformedProof(format!(
            "candidate chain {} does not match trusted chain {}",
            candidate.chain_id(),
            trusted.chain_id()
        )));
    }
    validate_validator_set(&trusted.next_validators, max_validators, "trusted next validator set")?;

    let sign_bytes = candidate.sign_bytes();
    let same_validators =
        candidate.header().validators_hash == trusted.header().next_validators_hash;

    if same_validators {
        let signers = collect_valid_signers(
            candidate.commit(),
            &sign_bytes,
            &[&candidate.validators],
            verifier,
        )?;
        let commit_power = tally_voting_power(&candidate.validators, &signers)?;
        check_quorum(commit_power, TrustThreshold::TWO_THIRDS)?;

        return Ok(VerificationOutcome {
            trusted_height: trusted.height(),
            height: candidate.height(),
            mode: VerificationMode::SameValidators,
            commit_power,
        });
    }

    let signers = collect_valid_signers(
        candidate.commit(),
        &sign_bytes,
        &[&candidate.validators, &trusted.next_validators],
        verifier,
    )?;

    let trusted_power = tally_voting_power(&trusted.next_validators, &signers)?;
    check_quorum(trusted_power, trust_threshold)?;

    let commit_power = tally_voting_power(&candidate.validators, &signers)?;
    check_quorum(commit_power, TrustThreshold::TWO_THIRDS)?;

    Ok(VerificationOutcome {
        trusted_height: trusted.height(),
        height: candidate.height(),
        mode: VerificationMode::ValidatorTransition,
        commit_power,
    })
}
