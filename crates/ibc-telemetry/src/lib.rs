//! # IBC Telemetry
//!
//! Log output for the connection workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ibc_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Connection handling now logs through `tracing`
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IBC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `IBC_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `IBC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `IBC_SERVICE_NAME` | `ibc-connection` | Service name |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{build_filter, init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
