//! Signature Verification Adapter
//!
//! Implements `VoteSignatureVerifier` for Ed25519 vote signatures.
//!
//! Verification is strict: small-order keys and non-canonical `R` values
//! are rejected, so no signature verifies under more than one message.

use crate::ports::outbound::VoteSignatureVerifier;
use ed25519_dalek::{Signature as DalekSignature, VerifyingKey};
use shared_types::{PublicKey, Signature};
use tracing::debug;

/// Ed25519 vote signature verifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519VoteVerifier;

impl Ed25519VoteVerifier {
    /// Create a verifier.
    pub fn new() -> Self {
        Self
    }
}

impl VoteSignatureVerifier for Ed25519VoteVerifier {
    fn verify_vote(&self, pub_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(pub_key) else {
            debug!(pub_key = %hex::encode(pub_key), "Rejecting undecodable public key");
            return false;
        };
        let signature = DalekSignature::from_bytes(signature);
        key.verify_strict(message, &signature).is_ok()
    }
}
