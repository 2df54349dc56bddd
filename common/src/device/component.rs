use std::fmt;

use serde::{Deserialize, Serialize};

/// Hardware component types reported in a device inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Chassis,
    Linecard,
    Port,
    Transceiver,
    PowerSupply,
    Fan,
    Cpu,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentType::Chassis => "CHASSIS",
            ComponentType::Linecard => "LINECARD",
            ComponentType::Port => "PORT",
            ComponentType::Transceiver => "TRANSCEIVER",
            ComponentType::PowerSupply => "POWER_SUPPLY",
            ComponentType::Fan => "FAN",
            ComponentType::Cpu => "CPU",
        };
        f.write_str(name)
    }
}

/// The three per-channel optics leaves read from a transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLeaf {
    /// Instantaneous input power, dBm.
    InputPower,
    /// Instantaneous output power, dBm.
    OutputPower,
    /// Instantaneous laser bias current, mA.
    LaserBiasCurrent,
}

impl ChannelLeaf {
    pub fn unit(&self) -> &'static str {
        match self {
            ChannelLeaf::InputPower | ChannelLeaf::OutputPower => "dBm",
            ChannelLeaf::LaserBiasCurrent => "mA",
        }
    }
}

impl fmt::Display for ChannelLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelLeaf::InputPower => "inputPowers",
            ChannelLeaf::OutputPower => "outputPowers",
            ChannelLeaf::LaserBiasCurrent => "biasCurrents",
        };
        f.write_str(name)
    }
}

/// Samples of every channel of one transceiver, in channel order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelReadings {
    pub input_powers: Vec<f64>,
    pub output_powers: Vec<f64>,
    pub bias_currents: Vec<f64>,
}

impl ChannelReadings {
    pub fn samples(&self, leaf: ChannelLeaf) -> &[f64] {
        match leaf {
            ChannelLeaf::InputPower => &self.input_powers,
            ChannelLeaf::OutputPower => &self.output_powers,
            ChannelLeaf::LaserBiasCurrent => &self.bias_currents,
        }
    }

    /// Leaves that returned no sample at all.
    pub fn empty_leaves(&self) -> Vec<ChannelLeaf> {
        [
            ChannelLeaf::InputPower,
            ChannelLeaf::OutputPower,
            ChannelLeaf::LaserBiasCurrent,
        ]
        .into_iter()
        .filter(|leaf| self.samples(*leaf).is_empty())
        .collect()
    }
}
