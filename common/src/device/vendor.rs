use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpticsError;

/// Vendor of a device under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vendor {
    Arista,
    Cisco,
    Juniper,
    Nokia,
    Ciena,
    Openconfig,
}

impl Vendor {
    pub const ALL: [Vendor; 6] = [
        Vendor::Arista,
        Vendor::Cisco,
        Vendor::Juniper,
        Vendor::Nokia,
        Vendor::Ciena,
        Vendor::Openconfig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Arista => "ARISTA",
            Vendor::Cisco => "CISCO",
            Vendor::Juniper => "JUNIPER",
            Vendor::Nokia => "NOKIA",
            Vendor::Ciena => "CIENA",
            Vendor::Openconfig => "OPENCONFIG",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = OpticsError;

    /// Parses a vendor keyword, ignoring case (e.g. "arista", "Juniper").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Vendor::ALL
            .into_iter()
            .find(|vendor| vendor.as_str() == upper)
            .ok_or_else(|| OpticsError::InvalidVendor(s.to_string()))
    }
}
