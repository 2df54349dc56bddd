//! # Topology File
//!
//! JSON description of a simulated DUT:
//!
//! ```json
//! {
//!   "name": "dut",
//!   "model": "7280R3",
//!   "vendor": "ARISTA",
//!   "ports": { "port1": "Ethernet1/1/1" },
//!   "interfaces": [{ "name": "Ethernet1/1/1", "enabled": true }],
//!   "components": [{
//!     "name": "Ethernet1/1 transceiver",
//!     "type": "TRANSCEIVER",
//!     "mfg_name": "FINISAR",
//!     "interface": "Ethernet1/1/1",
//!     "channels": [{ "input_power": -2.1, "output_power": -1.4, "laser_bias_current": 6.3 }]
//!   }],
//!   "settle_time_ms": 1500
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use optics_common::device::{component::ComponentType, vendor::Vendor};

/// Output power a transceiver reports while its laser is off.
pub const DEFAULT_DARK_OUTPUT_POWER: f64 = -40.0;
pub const DEFAULT_SETTLE_TIME_MS: u64 = 1_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    pub name: String,
    pub model: String,
    pub vendor: Vendor,
    /// Topology port id to interface name.
    #[serde(default)]
    pub ports: BTreeMap<String, String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceSpec>,
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
    /// Delay between an admin state change and the matching oper status.
    #[serde(default = "default_settle_time_ms")]
    pub settle_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceSpec {
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub mfg_name: Option<String>,
    /// Interface whose admin state drives this transceiver's laser.
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub channels: Vec<ChannelSpec>,
    #[serde(default = "default_dark_output_power")]
    pub dark_output_power: f64,
}

/// One optical channel. A `None` leaf is simply not reported by the device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelSpec {
    #[serde(default)]
    pub input_power: Option<f64>,
    #[serde(default)]
    pub output_power: Option<f64>,
    #[serde(default)]
    pub laser_bias_current: Option<f64>,
}

fn default_settle_time_ms() -> u64 {
    DEFAULT_SETTLE_TIME_MS
}

fn default_dark_output_power() -> f64 {
    DEFAULT_DARK_OUTPUT_POWER
}

fn enabled_by_default() -> bool {
    true
}

impl Topology {
    pub fn new(name: impl Into<String>, model: impl Into<String>, vendor: Vendor) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            vendor,
            ports: BTreeMap::new(),
            interfaces: Vec::new(),
            components: Vec::new(),
            settle_time_ms: DEFAULT_SETTLE_TIME_MS,
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading topology file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing topology file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let topology: Topology = serde_json::from_str(raw)?;
        topology.validate()?;
        Ok(topology)
    }

    /// Checks that every port and linked interface refers to a declared interface.
    pub fn validate(&self) -> anyhow::Result<()> {
        let declared = |name: &str| self.interfaces.iter().any(|intf| intf.name == name);

        for (port, interface) in &self.ports {
            anyhow::ensure!(
                declared(interface),
                "port {port} maps to undeclared interface {interface}"
            );
        }
        for component in &self.components {
            if let Some(interface) = &component.interface {
                anyhow::ensure!(
                    declared(interface),
                    "component {} links undeclared interface {interface}",
                    component.name
                );
            }
        }
        Ok(())
    }

    pub fn with_settle_time_ms(mut self, settle_time_ms: u64) -> Self {
        self.settle_time_ms = settle_time_ms;
        self
    }

    /// Declares an enabled interface and maps `port` to it.
    pub fn with_port(mut self, port: impl Into<String>, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        self.interfaces.push(InterfaceSpec {
            name: interface.clone(),
            enabled: true,
        });
        self.ports.insert(port.into(), interface);
        self
    }

    pub fn with_component(mut self, component: ComponentSpec) -> Self {
        self.components.push(component);
        self
    }
}

impl ComponentSpec {
    pub fn transceiver(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComponentType::Transceiver,
            mfg_name: None,
            interface: None,
            channels: Vec::new(),
            dark_output_power: DEFAULT_DARK_OUTPUT_POWER,
        }
    }

    pub fn with_mfg_name(mut self, mfg_name: impl Into<String>) -> Self {
        self.mfg_name = Some(mfg_name.into());
        self
    }

    pub fn linked_to(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    pub fn with_channel(mut self, input_power: f64, output_power: f64, laser_bias_current: f64) -> Self {
        self.channels.push(ChannelSpec {
            input_power: Some(input_power),
            output_power: Some(output_power),
            laser_bias_current: Some(laser_bias_current),
        });
        self
    }

    pub fn with_raw_channel(mut self, channel: ChannelSpec) -> Self {
        self.channels.push(channel);
        self
    }
}
