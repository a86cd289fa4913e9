//! # Domain Invariants
//!
//! Rules that must hold for every connection:
//!
//! 1. Committed heights are at least 1.
//! 2. Each accepted height is strictly greater than the previous one.
//! 3. A stored checkpoint is never overwritten.
//! 4. An established connection has a checkpoint at its latest height.

use super::errors::ConnectionError;
use shared_types::{ChainId, Height};

/// Lowest height a checkpoint may have.
pub const MIN_COMMIT_HEIGHT: Height = 1;

/// Width of the zero-padded height in checkpoint keys.
///
/// Enough digits for `u64::MAX`, so keys sort in height order.
pub const HEIGHT_KEY_WIDTH: usize = 20;

/// Invariant: committed heights start at 1.
pub fn invariant_commit_height(height: Height) -> Result<(), ConnectionError> {
    if height < MIN_COMMIT_HEIGHT {
        return Err(ConnectionError::InvalidHeight {
            height,
            reason: format!("must be at least {}", MIN_COMMIT_HEIGHT),
        });
    }
    Ok(())
}

/// Invariant: a new checkpoint must be strictly above the latest one.
pub fn invariant_height_increases(latest: Height, candidate: Height) -> Result<(), ConnectionError> {
    if candidate <= latest {
        return Err(ConnectionError::InvalidHeight {
            height: candidate,
            reason: format!("must be greater than latest trusted height {}", latest),
        });
    }
    Ok(())
}

/// Invariant: checkpoint history is append-only.
pub fn invariant_append_only(
    chain_id: &ChainId,
    height: Height,
    already_stored: bool,
) -> Result<(), ConnectionError> {
    if already_stored {
        return Err(ConnectionError::CheckpointOverwrite {
            chain_id: chain_id.clone(),
            height,
        });
    }
    Ok(())
}
