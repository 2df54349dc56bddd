//! # Device Models
//!
//! Read-only observations of a device under test. Nothing here is owned by the
//! checks: every value is fetched fresh from the device on each run.
//!
//! * [`vendor::Vendor`]: Vendor identifiers known to the harness.
//! * [`component::ComponentType`] and [`component::ChannelReadings`]: Hardware inventory and optics telemetry.
//! * [`interface::OperStatus`] and [`interface::InterfaceConfig`]: Interface state and configuration.

pub mod component;
pub mod interface;
pub mod vendor;
