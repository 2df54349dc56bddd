//! # Transceiver Naming
//!
//! Interfaces and the transceivers plugged into them are separate inventory
//! components. Each vendor names the transceiver component differently, so the
//! name is derived from the interface name with a per-vendor suffix.

use optics_common::{device::vendor::Vendor, error::OpticsError};

/// Suffix appended to the interface's parent path, or `None` when the vendor is unmapped.
///
/// An empty suffix means the transceiver shares the interface name.
pub fn naming_suffix(vendor: Vendor) -> Option<&'static str> {
    match vendor {
        Vendor::Arista => Some(" transceiver"),
        Vendor::Cisco => Some(""),
        Vendor::Juniper => Some(""),
        Vendor::Nokia | Vendor::Ciena | Vendor::Openconfig => None,
    }
}

/// Derives the transceiver component name for `interface` on a `vendor` device.
///
/// With a non-empty suffix the last `/` segment is dropped before appending it:
/// `Ethernet1/2/3` on Arista becomes `Ethernet1/2 transceiver`.
pub fn transceiver_name(interface: &str, vendor: Vendor) -> Result<String, OpticsError> {
    let suffix = naming_suffix(vendor).ok_or(OpticsError::UnknownVendor(vendor))?;

    if suffix.is_empty() {
        return Ok(interface.to_string());
    }

    let parent = match interface.rsplit_once('/') {
        Some((parent, _last)) => parent,
        None => "",
    };
    Ok(format!("{parent}{suffix}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
