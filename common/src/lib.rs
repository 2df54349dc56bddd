//! # Optics Common
//!
//! Shared building blocks for the optics checks.
//!
//! * **[`device`]**: Models observed on a device under test (vendors, components, interfaces).
//! * **[`ports`]**: Traits a device adapter implements so the checks can drive it.
//! * **[`report`]**: Findings recorded while a check runs.
//! * **[`error`]**: Fatal error conditions.
//! * **[`config`]**: Run-time settings shared by the CLI and the checks.

pub mod config;
pub mod device;
pub mod error;
pub mod ports;
pub mod report;
