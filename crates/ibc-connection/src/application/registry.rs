//! # Connection Registry
//!
//! Chain-scoped access to connection state in the shared store.
//!
//! ## Key Layout
//!
//! ```text
//! {prefix}/connections/{chain_id}/established              -> bool
//! {prefix}/connections/{chain_id}/height                   -> Height
//! {prefix}/connections/{chain_id}/checkpoints/{height:020} -> Checkpoint
//! ```
//!
//! Nothing is persisted until a runtime writes. A runtime for an unknown
//! chain reads as uninitialized.

use crate::config::ConnectionConfig;
use crate::domain::{
    invariants::{invariant_append_only, HEIGHT_KEY_WIDTH},
    Checkpoint, ConnectionError, ConnectionState, ConnectionStatus,
};
use ibc_typed_store::{BincodeCodec, Codec, KeyValueStore, TypedStore};
use shared_types::{ChainId, Height};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Hands out per-chain runtimes over one store.
pub struct ConnectionRegistry<B, C = BincodeCodec> {
    store: B,
    codec: C,
    prefix: String,
}

impl<B> ConnectionRegistry<B, BincodeCodec>
where
    B: Deref,
    B::Target: KeyValueStore,
{
    /// Registry using the configured key prefix and the bincode codec.
    pub fn from_config(store: B, config: &ConnectionConfig) -> Self {
        Self::new(store, BincodeCodec, config.key_prefix.clone())
    }
}

impl<B, C> ConnectionRegistry<B, C>
where
    B: Deref,
    B::Target: KeyValueStore,
    C: Codec,
{
    /// Create a registry over `store`.
    pub fn new(store: B, codec: C, prefix: impl Into<String>) -> Self {
        Self {
            store,
            codec,
            prefix: prefix.into(),
        }
    }

    /// Read-only runtime for `chain_id`.
    pub fn view(&self, chain_id: &ChainId) -> ConnectionRuntime<&B::Target, C> {
        ConnectionRuntime::new(&*self.store, self.codec.clone(), &self.prefix, chain_id.clone())
    }
}

impl<B, C> ConnectionRegistry<B, C>
where
    B: DerefMut,
    B::Target: KeyValueStore,
    C: Codec,
{
    /// Mutable runtime for `chain_id`. Always succeeds.
    pub fn runtime_for(&mut self, chain_id: &ChainId) -> ConnectionRuntime<&mut B::Target, C> {
        ConnectionRuntime::new(
            &mut *self.store,
            self.codec.clone(),
            &self.prefix,
            chain_id.clone(),
        )
    }
}

/// Connection state for one remote chain.
///
/// Each accessor performs a single typed read or write. Monotonicity of
/// heights is enforced by the handler, not here; only append-only checkpoint
/// history is guarded.
pub struct ConnectionRuntime<B, C> {
    store: B,
    codec: C,
    chain_id: ChainId,
    base: String,
}

impl<B, C> ConnectionRuntime<B, C>
where
    B: Deref,
    B::Target: KeyValueStore,
    C: Codec,
{
    fn new(store: B, codec: C, prefix: &str, chain_id: ChainId) -> Self {
        let base = format!("{}/connections/{}", prefix, chain_id);
        Self {
            store,
            codec,
            chain_id,
            base,
        }
    }

    /// Remote chain this runtime is scoped to.
    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    /// Key of the `established` flag.
    pub fn established_key(&self) -> String {
        format!("{}/established", self.base)
    }

    /// Key of the latest height.
    pub fn height_key(&self) -> String {
        format!("{}/height", self.base)
    }

    /// Key of the checkpoint at `height`.
    pub fn checkpoint_key(&self, height: Height) -> String {
        format!(
            "{}/checkpoints/{:0width$}",
            self.base,
            height,
            width = HEIGHT_KEY_WIDTH
        )
    }

    fn read<T>(&self, key: String) -> TypedStore<&B::Target, C, T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        TypedStore::new(&*self.store, self.codec.clone(), key)
    }

    /// True once a root of trust has been accepted.
    pub fn conn_established(&self) -> Result<bool, ConnectionError> {
        Ok(self.read::<bool>(self.established_key()).get()?.unwrap_or(false))
    }

    /// Latest trusted height, 0 if never set.
    pub fn get_commit_height(&self) -> Result<Height, ConnectionError> {
        Ok(self.read::<Height>(self.height_key()).get()?.unwrap_or(0))
    }

    /// Checkpoint stored at `height`.
    pub fn get_commit(&self, height: Height) -> Result<Option<Checkpoint>, ConnectionError> {
        Ok(self.read::<Checkpoint>(self.checkpoint_key(height)).get()?)
    }

    /// True iff a checkpoint is stored at `height`.
    pub fn has_commit(&self, height: Height) -> Result<bool, ConnectionError> {
        Ok(self.read::<Checkpoint>(self.checkpoint_key(height)).has()?)
    }

    /// Checkpoint at the latest height, `None` if not established.
    ///
    /// # Errors
    /// - `MissingCheckpoint` if established but the checkpoint is absent
    pub fn latest_checkpoint(&self) -> Result<Option<Checkpoint>, ConnectionError> {
        if !self.conn_established()? {
            return Ok(None);
        }
        let height = self.get_commit_height()?;
        match self.get_commit(height)? {
            Some(checkpoint) => Ok(Some(checkpoint)),
            None => Err(ConnectionError::MissingCheckpoint {
                chain_id: self.chain_id.clone(),
                height,
            }),
        }
    }

    /// Lifecycle state.
    pub fn state(&self) -> Result<ConnectionState, ConnectionError> {
        Ok(ConnectionState::from_established(self.conn_established()?))
    }

    /// Summary for the query surface.
    pub fn status(&self) -> Result<ConnectionStatus, ConnectionError> {
        Ok(ConnectionStatus {
            chain_id: self.chain_id.clone(),
            state: self.state()?,
            latest_height: self.get_commit_height()?,
        })
    }
}

impl<B, C> ConnectionRuntime<B, C>
where
    B: DerefMut,
    B::Target: KeyValueStore,
    C: Codec,
{
    /// Mark the connection established.
    pub fn set_established(&mut self) -> Result<(), ConnectionError> {
        let key = self.established_key();
        TypedStore::new(&mut *self.store, self.codec.clone(), key).set(&true)?;
        debug!(chain_id = %self.chain_id, "Connection marked established");
        Ok(())
    }

    /// Record `height` as the latest trusted height.
    ///
    /// Callers must only move the height forward.
    pub fn set_commit_height(&mut self, height: Height) -> Result<(), ConnectionError> {
        let key = self.height_key();
        TypedStore::new(&mut *self.store, self.codec.clone(), key).set(&height)?;
        debug!(chain_id = %self.chain_id, height, "Latest height updated");
        Ok(())
    }

    /// Append `checkpoint` at `height`.
    ///
    /// # Errors
    /// - `InvalidHeight` if `checkpoint` is for a different height
    /// - `CheckpointOverwrite` if a checkpoint already exists at `height`
    pub fn set_commit(&mut self, height: Height, checkpoint: &Checkpoint) -> Result<(), ConnectionError> {
        if checkpoint.height() != height {
            return Err(ConnectionError::InvalidHeight {
                height,
                reason: format!("checkpoint is for height {}", checkpoint.height()),
            });
        }
        invariant_append_only(&self.chain_id, height, self.has_commit(height)?)?;

        let key = self.checkpoint_key(height);
        TypedStore::new(&mut *self.store, self.codec.clone(), key).set(checkpoint)?;
        debug!(chain_id = %self.chain_id, height, "Checkpoint stored");
        Ok(())
    }
}
