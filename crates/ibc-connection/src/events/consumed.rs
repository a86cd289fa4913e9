//! Consumed messages (Incoming)
//!
//! Connection messages routed to this module by the execution engine, plus
//! the type-URL envelope they arrive in.

use crate::domain::{invariants::invariant_commit_height, Checkpoint, ConnectionError};
use ibc_typed_store::{Codec, JsonCodec};
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId, Height};

/// Route shared by every connection message.
pub const ROUTE: &str = "ibc";

/// Type URL of [`MsgOpenConnection`].
pub const OPEN_CONNECTION_TYPE_URL: &str = "/ibc.connection.MsgOpenConnection";

/// Type URL of [`MsgUpdateConnection`].
pub const UPDATE_CONNECTION_TYPE_URL: &str = "/ibc.connection.MsgUpdateConnection";

/// Metadata and stateless checks common to all routed messages.
pub trait Msg: Serialize + Sized {
    /// Module the message is routed to.
    fn route(&self) -> &'static str {
        ROUTE
    }

    /// Short action name, e.g. `open_conn`.
    fn type_name(&self) -> &'static str;

    /// Type URL identifying the message in a [`RawMessage`].
    fn type_url(&self) -> &'static str;

    /// Checks that need no state.
    fn validate_basic(&self) -> Result<(), ConnectionError>;

    /// Bytes the signer signs: the JSON encoding of the message.
    fn sign_bytes(&self) -> Result<Vec<u8>, ConnectionError> {
        JsonCodec
            .encode(self)
            .map_err(|e| ConnectionError::InvalidMessage(e.to_string()))
    }

    /// Accounts that must sign the enclosing transaction.
    fn signers(&self) -> Vec<Address>;
}

/// Open a connection from a root of trust.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgOpenConnection {
    /// Remote chain.
    pub chain_id: ChainId,
    /// Initial trusted checkpoint, supplied out of band.
    pub root_of_trust: Checkpoint,
    /// Submitting account.
    pub signer: Address,
}

impl Msg for MsgOpenConnection {
    fn type_name(&self) -> &'static str {
        "open_conn"
    }

    fn type_url(&self) -> &'static str {
        OPEN_CONNECTION_TYPE_URL
    }

    fn validate_basic(&self) -> Result<(), ConnectionError> {
        invariant_commit_height(self.root_of_trust.height())
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.signer]
    }
}

/// Advance a connection to a newer commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateConnection {
    /// Remote chain.
    pub chain_id: ChainId,
    /// Candidate checkpoint.
    pub commit: Checkpoint,
    /// Submitting account.
    pub signer: Address,
}

impl Msg for MsgUpdateConnection {
    fn type_name(&self) -> &'static str {
        "update_conn"
    }

    fn type_url(&self) -> &'static str {
        UPDATE_CONNECTION_TYPE_URL
    }

    fn validate_basic(&self) -> Result<(), ConnectionError> {
        invariant_commit_height(self.commit.height())
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.signer]
    }
}

/// Message envelope as delivered by the execution engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Type URL naming the message.
    pub type_url: String,
    /// Encoded message body.
    pub value: Vec<u8>,
}

/// Messages handled by the connection module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMsg {
    /// `OpenConnection`
    Open(MsgOpenConnection),
    /// `UpdateConnection`
    Update(MsgUpdateConnection),
}

impl ConnectionMsg {
    /// Decode an envelope, rejecting type URLs this module does not handle.
    pub fn from_raw<C: Codec>(raw: &RawMessage, codec: &C) -> Result<Self, ConnectionError> {
        let invalid = |e: ibc_typed_store::CodecError| {
            ConnectionError::InvalidMessage(format!("{}: {}", raw.type_url, e))
        };
        match raw.type_url.as_str() {
            OPEN_CONNECTION_TYPE_URL => codec.decode(&raw.value).map(Self::Open).map_err(invalid),
            UPDATE_CONNECTION_TYPE_URL => {
                codec.decode(&raw.value).map(Self::Update).map_err(invalid)
            }
            other => Err(ConnectionError::UnknownMessageType(other.to_string())),
        }
    }

    /// Encode into an envelope.
    pub fn to_raw<C: Codec>(&self, codec: &C) -> Result<RawMessage, ConnectionError> {
        let value = match self {
            Self::Open(msg) => codec.encode(msg),
            Self::Update(msg) => codec.encode(msg),
        }
        .map_err(|e| ConnectionError::InvalidMessage(e.to_string()))?;

        Ok(RawMessage {
            type_url: self.type_url().to_string(),
            value,
        })
    }

    /// Remote chain the message targets.
    pub fn chain_id(&self) -> &ChainId {
        match self {
            Self::Open(msg) => &msg.chain_id,
            Self::Update(msg) => &msg.chain_id,
        }
    }

    /// Submitting account.
    pub fn signer(&self) -> Address {
        match self {
            Self::Open(msg) => msg.signer,
            Self::Update(msg) => msg.signer,
        }
    }

    /// Height of the carried checkpoint.
    pub fn height(&self) -> Height {
        match self {
            Self::Open(msg) => msg.root_of_trust.height(),
            Self::Update(msg) => msg.commit.height(),
        }
    }

    /// See [`Msg::type_name`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Open(msg) => msg.type_name(),
            Self::Update(msg) => msg.type_name(),
        }
    }

    /// See [`Msg::type_url`].
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Open(msg) => msg.type_url(),
            Self::Update(msg) => msg.type_url(),
        }
    }

    /// See [`Msg::validate_basic`].
    pub fn validate_basic(&self) -> Result<(), ConnectionError> {
        match self {
            Self::Open(msg) => msg.validate_basic(),
            Self::Update(msg) => msg.validate_basic(),
        }
    }
}

impl From<MsgOpenConnection> for ConnectionMsg {
    fn from(msg: MsgOpenConnection) -> Self {
        Self::Open(msg)
    }
}

impl From<MsgUpdateConnection> for ConnectionMsg {
    fn from(msg: MsgUpdateConnection) -> Self {
        Self::Update(msg)
    }
}
