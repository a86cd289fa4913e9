//! # Domain Entities
//!
//! Remote-chain headers, commits and validator sets, bundled into the
//! [`Checkpoint`] a connection trusts.
//!
//! All hashes are SHA-256 over a fixed, length-prefixed byte layout so that
//! every replica derives identical digests.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};
use shared_types::{ChainId, Hash, Height, PublicKey, Signature};

/// Domain tag mixed into vote sign bytes.
const VOTE_DOMAIN: &[u8] = b"ibc/vote/v1";

/// A remote-chain validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// Ed25519 public key.
    pub pub_key: PublicKey,
    /// Voting power (stake weight).
    pub voting_power: u64,
}

impl Validator {
    /// Create a validator.
    pub fn new(pub_key: PublicKey, voting_power: u64) -> Self {
        Self {
            pub_key,
            voting_power,
        }
    }
}

/// Ordered validator set of a remote chain at some height.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSet {
    /// Validators in canonical order.
    pub validators: Vec<Validator>,
}

impl ValidatorSet {
    /// Create a set from validators, preserving order.
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Sum of voting power, saturating at `u64::MAX`.
    pub fn total_voting_power(&self) -> u64 {
        self.validators
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.voting_power))
    }

    /// Find a validator by public key.
    pub fn find(&self, pub_key: &PublicKey) -> Option<&Validator> {
        self.validators.iter().find(|v| &v.pub_key == pub_key)
    }

    /// Commitment to the set, referenced from headers.
    pub fn hash(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update((self.validators.len() as u64).to_be_bytes());
        for validator in &self.validators {
            hasher.update(validator.pub_key);
            hasher.update(validator.voting_power.to_be_bytes());
        }
        hasher.finalize().into()
    }
}

/// Remote-chain block header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Chain that produced the block.
    pub chain_id: ChainId,
    /// Block height.
    pub height: Height,
    /// Block time (unix seconds).
    pub time: u64,
    /// Hash of the set that signs this block.
    pub validators_hash: Hash,
    /// Hash of the set that signs the next block.
    pub next_validators_hash: Hash,
    /// Application state root after this block.
    pub app_hash: Hash,
}

impl Header {
    /// Block hash committed to by signatures.
    pub fn hash(&self) -> Hash {
        let chain_id = self.chain_id.as_str().as_bytes();
        let mut hasher = Sha256::new();
        hasher.update((chain_id.len() as u64).to_be_bytes());
        hasher.update(chain_id);
        hasher.update(self.height.to_be_bytes());
        hasher.update(self.time.to_be_bytes());
        hasher.update(self.validators_hash);
        hasher.update(self.next_validators_hash);
        hasher.update(self.app_hash);
        hasher.finalize().into()
    }
}

/// One validator's signature over a block.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSig {
    /// Public key of the signer.
    pub validator: PublicKey,
    /// Ed25519 signature over the canonical vote.
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
}

/// Signatures committing to a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Height of the committed block.
    pub height: Height,
    /// Hash of the committed header.
    pub block_hash: Hash,
    /// Validator signatures.
    pub signatures: Vec<CommitSig>,
}

/// Header together with the commit that signs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedHeader {
    /// The header.
    pub header: Header,
    /// Signatures over the header.
    pub commit: Commit,
}

/// Attested remote-chain state trusted at one height.
///
/// Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Signed header at this height.
    pub signed_header: SignedHeader,
    /// Set that signed this header.
    pub validators: ValidatorSet,
    /// Set authoritative for the next height.
    pub next_validators: ValidatorSet,
}

impl Checkpoint {
    /// Header height.
    pub fn height(&self) -> Height {
        self.signed_header.header.height
    }

    /// Chain that produced the header.
    pub fn chain_id(&self) -> &ChainId {
        &self.signed_header.header.chain_id
    }

    /// The header.
    pub fn header(&self) -> &Header {
        &self.signed_header.header
    }

    /// The commit.
    pub fn commit(&self) -> &Commit {
        &self.signed_header.commit
    }

    /// Bytes every validator signs for this checkpoint's block.
    pub fn sign_bytes(&self) -> Vec<u8> {
        CanonicalVote::new(self.chain_id(), self.height(), self.commit().block_hash).sign_bytes()
    }
}

/// The message a validator signs when committing a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalVote<'a> {
    /// Chain of the block.
    pub chain_id: &'a ChainId,
    /// Block height.
    pub height: Height,
    /// Block hash.
    pub block_hash: Hash,
}

impl<'a> CanonicalVote<'a> {
    /// Build a vote.
    pub fn new(chain_id: &'a ChainId, height: Height, block_hash: Hash) -> Self {
        Self {
            chain_id,
            height,
            block_hash,
        }
    }

    /// Canonical bytes to sign.
    pub fn sign_bytes(&self) -> Vec<u8> {
        let chain_id = self.chain_id.as_str().as_bytes();
        let mut bytes = Vec::with_capacity(VOTE_DOMAIN.len() + 8 + chain_id.len() + 8 + 32);
        bytes.extend_from_slice(VOTE_DOMAIN);
        bytes.extend_from_slice(&(chain_id.len() as u64).to_be_bytes());
        bytes.extend_from_slice(chain_id);
        bytes.extend_from_slice(&self.height.to_be_bytes());
        bytes.extend_from_slice(&self.block_hash);
        bytes
    }
}
