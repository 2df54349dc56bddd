//! # Optics Checks
//!
//! The check procedures run against a [`DeviceUnderTest`]:
//!
//! * [`inventory`]: Transceivers report power and bias current samples.
//! * [`power_update`]: Output power follows the interface admin state.
//! * [`bounds`]: Power ranges both checks assert against.
//!
//! Each procedure records its findings into reports instead of returning early,
//! so one bad reading never hides the rest.

use optics_common::{config::Config, ports::DeviceUnderTest, report::SuiteReport};
use tracing::info;

pub mod bounds;
pub mod inventory;
pub mod power_update;

/// Runs the inventory check, then the power update cases, in that order.
pub async fn run_all(dut: &dyn DeviceUnderTest, cfg: &Config) -> SuiteReport {
    info!("Running optics checks on {} ({} {})", dut.name(), dut.vendor(), dut.model());

    let mut suite = SuiteReport::new();
    suite.push(inventory::check_inventory(dut).await);
    suite.extend(power_update::check_power_update(dut, cfg, &power_update::default_cases()).await);
    suite
}
