//! # Algorithms Module
//!
//! Pure verification logic.
//!
//! - `validation` - structural checks on checkpoints and validator sets
//! - `voting_power` - signature checks and power tallies
//! - `verifier` - root-of-trust and commit verification

pub mod validation;
pub mod verifier;
pub mod voting_power;

pub use validation::{validate_checkpoint, validate_validator_set};
pub use verifier::{verify_commit, verify_root_of_trust};
pub use voting_power::{check_quorum, collect_valid_signers, tally_voting_power};
