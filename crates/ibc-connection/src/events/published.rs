//! Published events (Outgoing)
//!
//! Side effects of accepted messages, returned to the execution engine.

use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId, Height};

/// Event emitted by an accepted connection message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionEvent {
    /// A root of trust was accepted.
    ConnectionOpened {
        /// Remote chain
        chain_id: ChainId,
        /// Root-of-trust height
        height: Height,
        /// Submitting account
        signer: Address,
    },
    /// A newer checkpoint was accepted.
    ConnectionUpdated {
        /// Remote chain
        chain_id: ChainId,
        /// Latest height before the update
        previous_height: Height,
        /// New latest height
        height: Height,
        /// Submitting account
        signer: Address,
    },
}

impl ConnectionEvent {
    /// Action name matching the message type.
    pub fn action(&self) -> &'static str {
        match self {
            ConnectionEvent::ConnectionOpened { .. } => "open_conn",
            ConnectionEvent::ConnectionUpdated { .. } => "update_conn",
        }
    }

    /// Remote chain the event concerns.
    pub fn chain_id(&self) -> &ChainId {
        match self {
            ConnectionEvent::ConnectionOpened { chain_id, .. }
            | ConnectionEvent::ConnectionUpdated { chain_id, .. } => chain_id,
        }
    }

    /// Key/value attributes for indexing.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("module", super::ROUTE.to_string()),
            ("action", self.action().to_string()),
        ];
        match self {
            ConnectionEvent::ConnectionOpened {
                chain_id,
                height,
                signer,
            } => {
                attrs.push(("chain_id", chain_id.to_string()));
                attrs.push(("height", height.to_string()));
                attrs.push(("signer", signer.to_string()));
            }
            ConnectionEvent::ConnectionUpdated {
                chain_id,
                previous_height,
                height,
                signer,
            } => {
                attrs.push(("chain_id", chain_id.to_string()));
                attrs.push(("previous_height", previous_height.to_string()));
                attrs.push(("height", height.to_string()));
                attrs.push(("signer", signer.to_string()));
            }
        }
        attrs
    }
}
