use std::time::Duration;

use thiserror::Error;

use crate::device::{interface::OperStatus, vendor::Vendor};

/// Conditions that end a check case immediately.
#[derive(Debug, Error)]
pub enum OpticsError {
    #[error("get transceiver list for {model:?}: got 0, want > 0")]
    NoTransceivers { model: String },

    #[error("no transceiver naming available for DUT vendor {0}")]
    UnknownVendor(Vendor),

    #[error("invalid vendor: {0}")]
    InvalidVendor(String),

    #[error(
        "interface {interface:?} did not reach oper status {expected} within {timeout:?} (last seen: {})",
        describe_status(.last_seen)
    )]
    AwaitTimeout {
        interface: String,
        expected: OperStatus,
        last_seen: Option<OperStatus>,
        timeout: Duration,
    },

    #[error("port {0:?} is not part of the topology")]
    UnknownPort(String),

    #[error("component {0:?} does not exist on the DUT")]
    UnknownComponent(String),

    #[error("interface {0:?} does not exist on the DUT")]
    UnknownInterface(String),

    #[error("telemetry query failed: {0}")]
    Telemetry(anyhow::Error),

    #[error("config push failed: {0}")]
    Config(anyhow::Error),
}

fn describe_status(status: &Option<OperStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "nothing".to_string(),
    }
}
