//! # Connection Queries
//!
//! Read-only view over connection state for external query layers. JSON
//! renderings use the JSON codec; persisted state stays bincode.

use super::registry::ConnectionRegistry;
use crate::config::ConnectionConfig;
use crate::domain::{Checkpoint, ConnectionError, ConnectionStatus};
use crate::ports::inbound::ConnectionQueryApi;
use ibc_typed_store::{BincodeCodec, Codec, JsonCodec, KeyValueStore};
use serde::Serialize;
use shared_types::{ChainId, Height};

/// Query service over a borrowed store.
pub struct ConnectionQuerier<'a, S: KeyValueStore + ?Sized> {
    registry: ConnectionRegistry<&'a S, BincodeCodec>,
}

impl<'a, S: KeyValueStore + ?Sized> ConnectionQuerier<'a, S> {
    /// Create a querier using the configured key prefix.
    pub fn new(store: &'a S, config: &ConnectionConfig) -> Self {
        Self {
            registry: ConnectionRegistry::from_config(store, config),
        }
    }

    /// [`query_connection`](ConnectionQueryApi::query_connection) as JSON.
    pub fn query_connection_json(&self, chain_id: &ChainId) -> Result<Vec<u8>, ConnectionError> {
        to_json(&self.query_connection(chain_id)?)
    }

    /// [`query_checkpoint`](ConnectionQueryApi::query_checkpoint) as JSON;
    /// `null` when absent.
    pub fn query_checkpoint_json(
        &self,
        chain_id: &ChainId,
        height: Height,
    ) -> Result<Vec<u8>, ConnectionError> {
        to_json(&self.query_checkpoint(chain_id, height)?)
    }
}

impl<S: KeyValueStore + ?Sized> ConnectionQueryApi for ConnectionQuerier<'_, S> {
    fn query_connection(&self, chain_id: &ChainId) -> Result<ConnectionStatus, ConnectionError> {
        self.registry.view(chain_id).status()
    }

    fn query_checkpoint(
        &self,
        chain_id: &ChainId,
        height: Height,
    ) -> Result<Option<Checkpoint>, ConnectionError> {
        self.registry.view(chain_id).get_commit(height)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ConnectionError> {
    JsonCodec
        .encode(value)
        .map_err(|e| ConnectionError::InvalidMessage(e.to_string()))
}
