//! # Voting Power
//!
//! Signature checking and power tallies over validator sets.

use crate::domain::{Commit, TrustThreshold, ValidatorSet, VerificationError, VotingPowerTally};
use crate::ports::outbound::VoteSignatureVerifier;
use shared_types::PublicKey;
use std::collections::BTreeSet;

/// Verify every commit signature from a validator listed in `sets`.
///
/// Returns the keys whose signatures verified. Signatures from keys outside
/// every set are ignored. A listed validator with a bad signature makes the
/// whole commit malformed.
pub fn collect_valid_signers<S: VoteSignatureVerifier + ?Sized>(
    commit: &Commit,
    sign_bytes: &[u8],
    sets: &[&ValidatorSet],
    verifier: &S,
) -> Result<BTreeSet<PublicKey>, VerificationError> {
    let mut signers = BTreeSet::new();
    for sig in &commit.signatures {
        if !sets.iter().any(|set| set.find(&sig.validator).is_some()) {
            continue;
        }
        if !verifier.verify_vote(&sig.validator, sign_bytes, &sig.signature) {
            return Err(VerificationError::MalformedProof(format!(
                "invalid signature from validator {}",
                hex::encode(sig.validator)
            )));
        }
        signers.insert(sig.validator);
    }
    Ok(signers)
}

/// Sum the power of `set` members that appear in `signers`.
pub fn tally_voting_power(
    set: &ValidatorSet,
    signers: &BTreeSet<PublicKey>,
) -> Result<VotingPowerTally, VerificationError> {
    let overflow = || VerificationError::MalformedProof("voting power overflows".to_string());

    let mut tally = VotingPowerTally::default();
    for validator in &set.validators {
        tally.total = tally.total.checked_add(validator.voting_power).ok_or_else(overflow)?;
        if signers.contains(&validator.pub_key) {
            tally.signed = tally.signed.checked_add(validator.voting_power).ok_or_else(overflow)?;
        }
    }
    Ok(tally)
}

/// Require `tally.signed / tally.total > threshold`.
pub fn check_quorum(
    tally: VotingPowerTally,
    threshold: TrustThreshold,
) -> Result<(), VerificationError> {
    if threshold.is_met(tally.signed, tally.total) {
        Ok(())
    } else {
        Err(VerificationError::QuorumNotMet {
            signed: tally.signed,
            total: tally.total,
            numerator: threshold.numerator,
            denominator: threshold.denominator,
        })
    }
}
