//! # Structural Validation
//!
//! Checks that a checkpoint is internally consistent, independent of
//! signatures. Every failure is a `MalformedProof`.

use crate::domain::{invariants::MIN_COMMIT_HEIGHT, Checkpoint, ValidatorSet, VerificationError};
use std::collections::HashSet;

fn malformed(reason: impl Into<String>) -> VerificationError {
    VerificationError::MalformedProof(reason.into())
}

/// Validate a validator set.
///
/// Non-empty, at most `max_validators` entries, no duplicate keys, no zero
/// power, and a total that fits in `u64`.
pub fn validate_validator_set(
    set: &ValidatorSet,
    max_validators: usize,
    label: &str,
) -> Result<(), VerificationError> {
    if set.is_empty() {
        return Err(malformed(format!("{} is empty", label)));
    }
    if set.len() > max_validators {
        return Err(malformed(format!(
            "{} has {} validators, max {}",
            label,
            set.len(),
            max_validators
        )));
    }

    let mut seen = HashSet::with_capacity(set.len());
    let mut total: u64 = 0;
    for validator in &set.validators {
        if !seen.insert(validator.pub_key) {
            return Err(malformed(format!(
                "{} lists validator {} twice",
                label,
                hex::encode(validator.pub_key)
            )));
        }
        if validator.voting_power == 0 {
            return Err(malformed(format!(
                "{} has validator {} with zero voting power",
                label,
                hex::encode(validator.pub_key)
            )));
        }
        total = total
            .checked_add(validator.voting_power)
            .ok_or_else(|| malformed(format!("{} total voting power overflows", label)))?;
    }
    Ok(())
}

/// Validate a checkpoint's structure.
pub fn validate_checkpoint(
    checkpoint: &Checkpoint,
    max_validators: usize,
) -> Result<(), VerificationError> {
    let header = checkpoint.header();
    let commit = checkpoint.commit();

    if header.height < MIN_COMMIT_HEIGHT {
        return Err(malformed("header height is zero"));
    }
    if commit.height != header.height {
        return Err(malformed(format!(
            "commit height {} does not match header height {}",
            commit.height, header.height
        )));
    }
    if commit.block_hash != header.hash() {
        return Err(malformed("commit does not reference the header hash"));
    }

    validate_validator_set(&checkpoint.validators, max_validators, "validator set")?;
    validate_validator_set(&checkpoint.next_validators, max_validators, "next validator set")?;

    if header.validators_hash != checkpoint.validators.hash() {
        return Err(malformed("validators hash mismatch"));
    }
    if header.next_validators_hash != checkpoint.next_validators.hash() {
        return Err(malformed("next validators hash mismatch"));
    }

    if commit.signatures.len() > checkpoint.validators.len() {
        return Err(malformed(format!(
            "commit has {} signatures for {} validators",
            commit.signatures.len(),
            checkpoint.validators.len()
        )));
    }
    let mut signers = HashSet::with_capacity(commit.signatures.len());
    for sig in &commit.signatures {
        if !signers.insert(sig.validator) {
            return Err(malformed(format!(
                "validator {} signed twice",
                hex::encode(sig.validator)
            )));
        }
    }

    Ok(())
}
