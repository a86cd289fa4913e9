//! # Connection Message Handler
//!
//! Drives the connection state machine:
//!
//! ```text
//! Uninitialized --OpenConnection--> Established --UpdateConnection--> Established
//! ```
//!
//! Every message runs against a write buffer over the context's store. The
//! buffer is flushed only when the message is accepted, so a rejection never
//! leaves partial state behind.

use super::registry::{ConnectionRegistry, ConnectionRuntime};
use crate::adapters::QuorumVerifier;
use crate::config::ConnectionConfig;
use crate::domain::{
    invariants::invariant_height_increases, ConnectionError, VerificationError,
};
use crate::events::{
    ConnectionEvent, ConnectionMsg, MsgOpenConnection, MsgUpdateConnection, RawMessage,
};
use crate::metrics;
use crate::ports::inbound::{ConnectionApi, HandlerResponse};
use crate::ports::outbound::{CommitVerifier, ExecutionContext};
use ibc_typed_store::{BincodeCodec, BufferedStore, KeyValueStore, StoreError};
use shared_types::ChainId;
use tracing::{debug, error, info, warn};

/// Handler for connection messages.
pub struct ConnectionHandler<V> {
    config: ConnectionConfig,
    verifier: V,
}

impl ConnectionHandler<QuorumVerifier> {
    /// Handler with the default quorum verifier.
    pub fn with_default_verifier(config: ConnectionConfig) -> Result<Self, ConnectionError> {
        let verifier = QuorumVerifier::from_config(&config);
        Self::new(config, verifier)
    }
}

impl<V: CommitVerifier> ConnectionHandler<V> {
    /// Create a handler after validating `config`.
    pub fn new(config: ConnectionConfig, verifier: V) -> Result<Self, ConnectionError> {
        config.validate()?;
        Ok(Self { config, verifier })
    }

    /// Active configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        msg: &ConnectionMsg,
    ) -> Result<ConnectionEvent, ConnectionError> {
        msg.validate_basic()?;

        let mut buffer = BufferedStore::new(ctx.store_mut());
        match self.apply(&mut buffer, msg) {
            Ok(event) => {
                let written = buffer.flush().map_err(StoreError::from)?;
                debug!(chain_id = %msg.chain_id(), keys = written, "Committed connection state");
                Ok(event)
            }
            Err(err) => {
                buffer.discard();
                Err(err)
            }
        }
    }

    fn apply<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        msg: &ConnectionMsg,
    ) -> Result<ConnectionEvent, ConnectionError> {
        let mut registry = ConnectionRegistry::from_config(store, &self.config);
        let mut runtime = registry.runtime_for(msg.chain_id());
        match msg {
            ConnectionMsg::Open(open) => self.open(&mut runtime, open),
            ConnectionMsg::Update(update) => self.update(&mut runtime, update),
        }
    }

    fn open<S: KeyValueStore + ?Sized>(
        &self,
        runtime: &mut ConnectionRuntime<&mut S, BincodeCodec>,
        msg: &MsgOpenConnection,
    ) -> Result<ConnectionEvent, ConnectionError> {
        if runtime.conn_established()? {
            return Err(ConnectionError::ConnectionAlreadyEstablished {
                chain_id: msg.chain_id.clone(),
            });
        }
        let root = &msg.root_of_trust;
        ensure_same_chain(&msg.chain_id, root.chain_id())?;

        let tally = self.verifier.verify_root(root).inspect_err(|e| {
            metrics::record_verification(e.label());
        })?;
        metrics::record_verification("accepted");
        debug!(
            chain_id = %msg.chain_id,
            signed = tally.signed,
            total = tally.total,
            "Root of trust verified"
        );

        let height = root.height();
        runtime.set_commit(height, root)?;
        runtime.set_commit_height(height)?;
        runtime.set_established()?;

        Ok(ConnectionEvent::ConnectionOpened {
            chain_id: msg.chain_id.clone(),
            height,
            signer: msg.signer,
        })
    }

    fn update<S: KeyValueStore + ?Sized>(
        &self,
        runtime: &mut ConnectionRuntime<&mut S, BincodeCodec>,
        msg: &MsgUpdateConnection,
    ) -> Result<ConnectionEvent, ConnectionError> {
        if !runtime.conn_established()? {
            return Err(ConnectionError::ConnectionNotEstablished {
                chain_id: msg.chain_id.clone(),
            });
        }
        let latest = runtime.get_commit_height()?;
        let trusted = runtime
            .latest_checkpoint()?
            .ok_or_else(|| ConnectionError::MissingCheckpoint {
                chain_id: msg.chain_id.clone(),
                height: latest,
            })?;

        let candidate = &msg.commit;
        ensure_same_chain(&msg.chain_id, candidate.chain_id())?;
        invariant_height_increases(latest, candidate.height())?;

        let outcome = self.verifier.verify(&trusted, candidate).inspect_err(|e| {
            metrics::record_verification(e.label());
        })?;
        metrics::record_verification("accepted");
        debug!(
            chain_id = %msg.chain_id,
            mode = ?outcome.mode,
            signed = outcome.commit_power.signed,
            total = outcome.commit_power.total,
            "Commit verified"
        );

        let height = candidate.height();
        runtime.set_commit(height, candidate)?;
        runtime.set_commit_height(height)?;

        Ok(ConnectionEvent::ConnectionUpdated {
            chain_id: msg.chain_id.clone(),
            previous_height: latest,
            height,
            signer: msg.signer,
        })
    }
}

fn ensure_same_chain(expected: &ChainId, actual: &ChainId) -> Result<(), ConnectionError> {
    if expected != actual {
        return Err(VerificationError::MalformedProof(format!(
            "checkpoint is for chain {}, message targets {}",
            actual, expected
        ))
        .into());
    }
    Ok(())
}

impl<V: CommitVerifier> ConnectionApi for ConnectionHandler<V> {
    fn handle(&self, ctx: &mut dyn ExecutionContext, msg: &ConnectionMsg) -> HandlerResponse {
        let msg_type = msg.type_name();
        match self.execute(ctx, msg) {
            Ok(event) => {
                info!(
                    chain_id = %msg.chain_id(),
                    height = msg.height(),
                    msg_type,
                    block_height = ctx.block_height(),
                    "Connection message accepted"
                );
                metrics::record_message(msg_type, "accepted");
                HandlerResponse::accepted(vec![event])
            }
            Err(err) => {
                if err.is_fatal() {
                    error!(
                        chain_id = %msg.chain_id(),
                        msg_type,
                        code = err.code(),
                        error = %err,
                        "Connection state is corrupt"
                    );
                } else {
                    warn!(
                        chain_id = %msg.chain_id(),
                        height = msg.height(),
                        msg_type,
                        code = err.code(),
                        error = %err,
                        "Connection message rejected"
                    );
                }
                metrics::record_message(msg_type, err.label());
                HandlerResponse::rejected(err)
            }
        }
    }

    fn handle_raw(&self, ctx: &mut dyn ExecutionContext, raw: &RawMessage) -> HandlerResponse {
        match ConnectionMsg::from_raw(raw, &BincodeCodec) {
            Ok(msg) => self.handle(ctx, &msg),
            Err(err) => {
                warn!(type_url = %raw.type_url, error = %err, "Undecodable connection message");
                metrics::record_message("unknown", err.label());
                HandlerResponse::rejected(err)
            }
        }
    }
}
