//! # Inbound Ports
//!
//! API traits exposed to the execution engine and to query layers.

use super::outbound::ExecutionContext;
use crate::domain::{Checkpoint, ConnectionError, ConnectionStatus};
use crate::events::{ConnectionEvent, ConnectionMsg, RawMessage};
use shared_types::{ChainId, Height};

/// Outcome of dispatching one message.
///
/// Events are empty whenever `result` is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerResponse {
    /// Side effects of an accepted message.
    pub events: Vec<ConnectionEvent>,
    /// Acceptance or the reason for rejection.
    pub result: Result<(), ConnectionError>,
}

impl HandlerResponse {
    /// Accepted with `events`.
    pub fn accepted(events: Vec<ConnectionEvent>) -> Self {
        Self {
            events,
            result: Ok(()),
        }
    }

    /// Rejected with `error`.
    pub fn rejected(error: ConnectionError) -> Self {
        Self {
            events: Vec::new(),
            result: Err(error),
        }
    }

    /// True if the message was accepted.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Error code, 0 on success.
    pub fn code(&self) -> u32 {
        self.result.as_ref().err().map_or(0, ConnectionError::code)
    }
}

/// Message dispatch - inbound port.
pub trait ConnectionApi {
    /// Process a decoded message to completion.
    fn handle(&self, ctx: &mut dyn ExecutionContext, msg: &ConnectionMsg) -> HandlerResponse;

    /// Decode an envelope and process it.
    fn handle_raw(&self, ctx: &mut dyn ExecutionContext, raw: &RawMessage) -> HandlerResponse;
}

/// Read-only query surface - inbound port.
pub trait ConnectionQueryApi {
    /// State and latest height of the connection to `chain_id`.
    fn query_connection(&self, chain_id: &ChainId) -> Result<ConnectionStatus, ConnectionError>;

    /// Checkpoint stored for `chain_id` at `height`.
    fn query_checkpoint(
        &self,
        chain_id: &ChainId,
        height: Height,
    ) -> Result<Option<Checkpoint>, ConnectionError>;
}
