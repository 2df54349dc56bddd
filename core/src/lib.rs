//! Optics telemetry checks for a device under test.
//!
//! * [`checks`]: The inventory and power update procedures.
//! * [`transceiver`]: Vendor-specific transceiver naming.
//! * [`simulator`]: An in-memory device adapter built from a topology file.

pub mod checks;
pub mod simulator;
pub mod transceiver;
