//! # Application Module
//!
//! Services orchestrating the domain, algorithms and outbound ports.
//!
//! - `registry` - per-chain typed access to connection state
//! - `handler` - the open/update state machine
//! - `query` - read-only query surface

pub mod handler;
pub mod query;
pub mod registry;

pub use handler::ConnectionHandler;
pub use query::ConnectionQuerier;
pub use registry::{ConnectionRegistry, ConnectionRuntime};
