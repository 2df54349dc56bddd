//! # Device Ports
//!
//! Contracts the checks use to reach a device under test.
//!
//! ## Rules
//! 1. Everything here is a trait; adapters live in `optics-core`.
//! 2. Reads are side-effect free. The only write is [`InterfaceConfigurator::replace_interface`].
//! 3. Missing optional leaves are `Ok(None)`; errors are reserved for failed queries.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::device::{
    component::{ChannelReadings, ComponentType},
    interface::{InterfaceConfig, OperStatus},
    vendor::Vendor,
};
use crate::error::OpticsError;

/// A device under test, reachable for reads and config writes.
pub trait DeviceUnderTest: Device + ComponentTelemetry + InterfaceTelemetry + InterfaceConfigurator {}

impl<T> DeviceUnderTest for T where
    T: Device + ComponentTelemetry + InterfaceTelemetry + InterfaceConfigurator
{
}

/// Identity and topology of the device.
pub trait Device: Send + Sync {
    fn name(&self) -> &str;
    fn model(&self) -> &str;
    fn vendor(&self) -> Vendor;

    /// Resolves a topology port id (e.g. `port1`) to the interface name on the device.
    fn port(&self, id: &str) -> Result<String, OpticsError>;
}

/// Hardware inventory and per-channel optics leaves.
#[async_trait]
pub trait ComponentTelemetry: Send + Sync {
    async fn find_components_by_type(&self, kind: ComponentType) -> Result<Vec<String>, OpticsError>;

    /// Reads the manufacturer name, `None` when the leaf is not present.
    async fn lookup_mfg_name(&self, component: &str) -> Result<Option<String>, OpticsError>;

    async fn input_powers(&self, component: &str) -> Result<Vec<f64>, OpticsError>;

    async fn output_powers(&self, component: &str) -> Result<Vec<f64>, OpticsError>;

    async fn laser_bias_currents(&self, component: &str) -> Result<Vec<f64>, OpticsError>;

    /// Fetches all three channel leaves of a transceiver.
    async fn channel_readings(&self, component: &str) -> Result<ChannelReadings, OpticsError> {
        Ok(ChannelReadings {
            input_powers: self.input_powers(component).await?,
            output_powers: self.output_powers(component).await?,
            bias_currents: self.laser_bias_currents(component).await?,
        })
    }
}

/// Interface state leaves.
#[async_trait]
pub trait InterfaceTelemetry: Send + Sync {
    async fn oper_status(&self, interface: &str) -> Result<OperStatus, OpticsError>;

    /// Blocks until `interface` reports `expected`, or fails once `timeout` elapses.
    ///
    /// The default polls [`InterfaceTelemetry::oper_status`] every `poll_interval`.
    /// Adapters with a streaming telemetry source may override it.
    async fn await_oper_status(
        &self,
        interface: &str,
        expected: OperStatus,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<OperStatus, OpticsError> {
        let mut last_seen: Option<OperStatus> = None;

        let polled = tokio::time::timeout(timeout, async {
            loop {
                let status = self.oper_status(interface).await?;
                last_seen = Some(status);
                if status == expected {
                    return Ok::<OperStatus, OpticsError>(status);
                }
                debug!("{interface} oper status is {status}, waiting for {expected}");
                tokio::time::sleep(poll_interval).await;
            }
        })
        .await;

        match polled {
            Ok(result) => result,
            Err(_elapsed) => Err(OpticsError::AwaitTimeout {
                interface: interface.to_string(),
                expected,
                last_seen,
                timeout,
            }),
        }
    }
}

#[async_trait]
pub trait InterfaceConfigurator: Send + Sync {
    /// Replaces the whole interface config on the device.
    async fn replace_interface(&self, config: &InterfaceConfig) -> Result<(), OpticsError>;
}
