//! # Domain Value Objects
//!
//! Immutable value types for cross-chain connections.

use serde::{Deserialize, Serialize};
use shared_types::{ChainId, Height};
use std::fmt;

/// Fraction of voting power that must sign, compared strictly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustThreshold {
    /// Numerator.
    pub numerator: u64,
    /// Denominator.
    pub denominator: u64,
}

impl TrustThreshold {
    /// One third, the weakest threshold that still excludes a faulty minority.
    pub const ONE_THIRD: Self = Self {
        numerator: 1,
        denominator: 3,
    };

    /// Two thirds, the BFT commit threshold.
    pub const TWO_THIRDS: Self = Self {
        numerator: 2,
        denominator: 3,
    };

    /// Create a threshold without validating it.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Valid iff `1/3 <= n/d <= 1` and `d > 0`.
    pub fn is_valid(&self) -> bool {
        if self.denominator == 0 || self.numerator > self.denominator {
            return false;
        }
        // n/d >= 1/3  <=>  3n >= d
        (self.numerator as u128) * 3 >= self.denominator as u128
    }

    /// True iff `signed / total` is strictly greater than this fraction.
    ///
    /// Computed in `u128`, so no intermediate product overflows.
    pub fn is_met(&self, signed: u64, total: u64) -> bool {
        if total == 0 || self.denominator == 0 {
            return false;
        }
        (signed as u128) * (self.denominator as u128) > (total as u128) * (self.numerator as u128)
    }
}

impl Default for TrustThreshold {
    fn default() -> Self {
        Self::TWO_THIRDS
    }
}

impl fmt::Display for TrustThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Lifecycle state of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    /// No root of trust accepted yet.
    Uninitialized,
    /// Root of trust accepted; updates advance the latest height.
    Established,
}

impl ConnectionState {
    /// Derive from the stored flag.
    pub fn from_established(established: bool) -> Self {
        if established {
            Self::Established
        } else {
            Self::Uninitialized
        }
    }
}

/// Connection summary reported by the query surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Remote chain.
    pub chain_id: ChainId,
    /// Lifecycle state.
    pub state: ConnectionState,
    /// Latest trusted height (0 when uninitialized).
    pub latest_height: Height,
}

impl ConnectionStatus {
    /// Convenience for `state == Established`.
    pub fn is_established(&self) -> bool {
        self.state == ConnectionState::Established
    }
}

/// How a candidate was linked to the trusted checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMode {
    /// Candidate is signed by the set the trusted checkpoint announced.
    SameValidators,
    /// Candidate is signed by a different set, trusted transitively.
    ValidatorTransition,
}

/// Power tally for one validator set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VotingPowerTally {
    /// Power of validators with a valid signature.
    pub signed: u64,
    /// Total power of the set.
    pub total: u64,
}

/// Successful verification of a candidate checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Trusted height the candidate was verified against.
    pub trusted_height: Height,
    /// Candidate height.
    pub height: Height,
    /// Path taken.
    pub mode: VerificationMode,
    /// Tally of the candidate's own set.
    pub commit_power: VotingPowerTally,
}
