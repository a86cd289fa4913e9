//! # Connection Metrics
//!
//! Prometheus counters for connection message handling.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! ibc-connection = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `ibc_connection_messages_total{msg_type, outcome}` - handled messages
//! - `ibc_connection_verifications_total{outcome}` - light-client verdicts

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Handled messages, labeled by type and outcome
    pub static ref MESSAGES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "ibc_connection_messages_total",
        "Total number of connection messages handled",
        &["msg_type", "outcome"]
    )
    .expect("Failed to create MESSAGES_TOTAL metric");

    /// Light-client verdicts, labeled by outcome
    pub static ref VERIFICATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "ibc_connection_verifications_total",
        "Total number of commit verifications",
        &["outcome"]
    )
    .expect("Failed to create VERIFICATIONS_TOTAL metric");
}

/// Record a handled message (`outcome` is `accepted` or an error label)
#[cfg(feature = "metrics")]
pub fn record_message(msg_type: &str, outcome: &str) {
    MESSAGES_TOTAL.with_label_values(&[msg_type, outcome]).inc();
}

/// Record a verification verdict
#[cfg(feature = "metrics")]
pub fn record_verification(outcome: &str) {
    VERIFICATIONS_TOTAL.with_label_values(&[outcome]).inc();
}

// No-op implementations when metrics feature is disabled
/// Record a handled message (no-op without the `metrics` feature)
#[cfg(not(feature = "metrics"))]
pub fn record_message(_msg_type: &str, _outcome: &str) {}

/// Record a verification verdict (no-op without the `metrics` feature)
#[cfg(not(feature = "metrics"))]
pub fn record_verification(_outcome: &str) {}
