//! Interface-state-driven optics power check.
//!
//! Toggles the admin state of one interface and verifies that the transceiver's
//! output power follows it: lit while enabled, dark once disabled. Cases run in
//! order because each one starts from the state the previous one left behind.

use std::time::Instant;

use optics_common::{
    config::Config,
    device::interface::{InterfaceConfig, OperStatus},
    error::OpticsError,
    ports::DeviceUnderTest,
    report::{CaseReport, SuiteReport},
};

use super::bounds::{MAX_OPTICS_POWER, MIN_OPTICS_POWER, PowerBounds};
use crate::transceiver;

pub const CASE_NAME: &str = "optics power update";

#[derive(Debug, Clone, PartialEq)]
pub struct PowerUpdateCase {
    pub description: &'static str,
    /// Admin state written to the interface.
    pub enabled: bool,
    pub expected_status: OperStatus,
    pub max_output_power: f64,
    pub check_min_output_power: bool,
}

impl PowerUpdateCase {
    pub fn output_bounds(&self) -> PowerBounds {
        if self.check_min_output_power {
            PowerBounds::within(MIN_OPTICS_POWER, self.max_output_power)
        } else {
            PowerBounds::at_most(self.max_output_power)
        }
    }
}

/// Enable, disable, then re-enable.
pub fn default_cases() -> Vec<PowerUpdateCase> {
    vec![
        PowerUpdateCase {
            description: "Check initial input and output optics powers are OK",
            enabled: true,
            expected_status: OperStatus::Up,
            max_output_power: MAX_OPTICS_POWER,
            check_min_output_power: true,
        },
        PowerUpdateCase {
            description: "Check output optics power is very small after interface is disabled",
            enabled: false,
            expected_status: OperStatus::Down,
            max_output_power: MIN_OPTICS_POWER,
            check_min_output_power: false,
        },
        PowerUpdateCase {
            description: "Check output optics power is normal after interface is re-enabled",
            enabled: true,
            expected_status: OperStatus::Up,
            max_output_power: MAX_OPTICS_POWER,
            check_min_output_power: true,
        },
    ]
}

/// Runs every case against the interface behind `cfg.port_id`, one report per case.
pub async fn check_power_update(
    dut: &dyn DeviceUnderTest,
    cfg: &Config,
    cases: &[PowerUpdateCase],
) -> SuiteReport {
    let mut suite = SuiteReport::new();

    let interface = match dut.port(&cfg.port_id) {
        Ok(interface) => interface,
        Err(e) => {
            let mut report = CaseReport::new(CASE_NAME);
            report.abort(&e);
            suite.push(report);
            return suite;
        }
    };

    for case in cases {
        let mut report = CaseReport::new(format!("{CASE_NAME}/{}", case.description));
        let start_time = Instant::now();

        // A fatal error ends this case only; the next one still runs.
        if let Err(e) = run_case(dut, &interface, case, cfg, &mut report).await {
            report.abort(&e);
        }

        report.elapsed = start_time.elapsed();
        suite.push(report);
    }

    suite
}

pub async fn run_case(
    dut: &dyn DeviceUnderTest,
    interface: &str,
    case: &PowerUpdateCase,
    cfg: &Config,
    report: &mut CaseReport,
) -> Result<(), OpticsError> {
    report.log(case.description);

    let config = InterfaceConfig::new(interface).with_enabled(case.enabled);
    dut.replace_interface(&config).await?;
    dut.await_oper_status(
        interface,
        case.expected_status,
        cfg.oper_status_timeout,
        cfg.poll_interval,
    )
    .await?;
    report.log(format!("{interface} oper status is {}", case.expected_status));

    let transceiver_name = transceiver::transceiver_name(interface, dut.vendor())?;

    let Some(mfg_name) = dut.lookup_mfg_name(&transceiver_name).await? else {
        report.skip(format!("MfgName for {transceiver_name:?} is not present, skip it"));
        return Ok(());
    };
    report.log(format!("Transceiver {transceiver_name} MfgName: {mfg_name}"));

    let input_powers = dut.input_powers(&transceiver_name).await?;
    let output_powers = dut.output_powers(&transceiver_name).await?;
    report.log(format!("Transceiver {transceiver_name} inputPowers: {input_powers:?}"));
    report.log(format!("Transceiver {transceiver_name} outputPowers: {output_powers:?}"));

    let input_bounds = PowerBounds::nominal();
    for &in_power in &input_powers {
        if !input_bounds.contains(in_power) {
            report.error(format!(
                "Get inputPower for port {interface:?}: got {in_power:.2}, want within {input_bounds}"
            ));
        }
    }

    let output_bounds = case.output_bounds();
    for &out_power in &output_powers {
        for violation in output_bounds.violations(out_power) {
            report.error(format!("Get outPower for port {interface:?}: {violation}"));
        }
    }

    Ok(())
}
