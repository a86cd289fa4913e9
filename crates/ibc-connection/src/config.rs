//! # Connection Configuration
//!
//! Configuration for the connection handler and verifier.

use crate::domain::{ConnectionError, TrustThreshold, CODESPACE};
use serde::{Deserialize, Serialize};

/// Default namespace for connection keys in the shared store.
pub const DEFAULT_KEY_PREFIX: &str = "ibc";

/// Default upper bound on validators per set.
pub const DEFAULT_MAX_VALIDATORS: usize = 256;

/// Connection module configuration.
///
/// Every replica must run with identical values, since they affect the
/// accept/reject verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Fraction of the trusted set that must sign a validator-set transition.
    pub trust_threshold: TrustThreshold,

    /// Namespace for connection keys in the shared store.
    pub key_prefix: String,

    /// Maximum validators accepted in a single set.
    pub max_validators: usize,

    /// Codespace reported with error codes.
    pub codespace: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            trust_threshold: TrustThreshold::default(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            max_validators: DEFAULT_MAX_VALIDATORS,
            codespace: CODESPACE.to_string(),
        }
    }
}

impl ConnectionConfig {
    /// Create a config for testing (small validator sets).
    pub fn for_testing() -> Self {
        Self {
            max_validators: 16,
            ..Self::default()
        }
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConnectionError> {
        if !self.trust_threshold.is_valid() {
            return Err(ConnectionError::InvalidConfig(format!(
                "trust threshold {} must lie in [1/3, 1]",
                self.trust_threshold
            )));
        }
        if self.key_prefix.is_empty() || self.key_prefix.contains('/') {
            return Err(ConnectionError::InvalidConfig(format!(
                "key prefix {:?} must be a non-empty single path segment",
                self.key_prefix
            )));
        }
        if self.max_validators == 0 {
            return Err(ConnectionError::InvalidConfig(
                "max_validators must be positive".to_string(),
            ));
        }
        if self.codespace.is_empty() {
            return Err(ConnectionError::InvalidConfig(
                "codespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
