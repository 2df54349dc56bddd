//! Transceiver inventory check.
//!
//! Every transceiver that reports a manufacturer name must report input power,
//! output power and laser bias current for its channels. Transceivers without a
//! manufacturer name are treated as empty cages and skipped.

use std::time::Instant;

use optics_common::{
    device::component::{ChannelLeaf, ComponentType},
    error::OpticsError,
    ports::DeviceUnderTest,
    report::CaseReport,
};

pub const CASE_NAME: &str = "optics power and bias current";

/// Runs the inventory check and always returns its report.
pub async fn check_inventory(dut: &dyn DeviceUnderTest) -> CaseReport {
    let mut report = CaseReport::new(CASE_NAME);
    let start_time = Instant::now();

    if let Err(e) = validate_transceivers(dut, &mut report).await {
        report.abort(&e);
    }

    report.elapsed = start_time.elapsed();
    report
}

/// Records non-fatal findings into `report`; returns early only on fatal errors.
pub async fn validate_transceivers(
    dut: &dyn DeviceUnderTest,
    report: &mut CaseReport,
) -> Result<(), OpticsError> {
    let transceivers = dut.find_components_by_type(ComponentType::Transceiver).await?;
    report.log(format!("Found transceiver list: {transceivers:?}"));
    if transceivers.is_empty() {
        return Err(OpticsError::NoTransceivers {
            model: dut.model().to_string(),
        });
    }

    for transceiver in &transceivers {
        report.log(format!("Validate transceiver: {transceiver}"));

        let Some(mfg_name) = dut.lookup_mfg_name(transceiver).await? else {
            report.log(format!("MfgName for {transceiver:?} is not present, skip it"));
            continue;
        };
        report.log(format!("Transceiver {transceiver} MfgName: {mfg_name}"));

        let readings = dut.channel_readings(transceiver).await?;
        for leaf in [
            ChannelLeaf::InputPower,
            ChannelLeaf::OutputPower,
            ChannelLeaf::LaserBiasCurrent,
        ] {
            report.log(format!(
                "Transceiver {transceiver} {leaf} ({}): {:?}",
                leaf.unit(),
                readings.samples(leaf)
            ));
        }

        for leaf in readings.empty_leaves() {
            report.error(format!("Get {leaf} list for {transceiver:?}: got 0, want > 0"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::{
        SimulatedDut,
        topology::{ChannelSpec, ComponentSpec, Topology},
    };
    use optics_common::{device::vendor::Vendor, report::Verdict};

    fn topology() -> Topology {
        Topology::new("dut", "8201-32FH", Vendor::Cisco).with_port("port1", "FourHundredGigE0/0/0/1")
    }

    #[tokio::test]
    async fn aborts_without_transceivers() {
        let dut = SimulatedDut::new(topology());
        let report = check_inventory(&dut).await;

        assert_eq!(report.verdict(), Verdict::Aborted);
        assert!(report.fatal.as_deref().unwrap().contains("8201-32FH"));
    }

    #[tokio::test]
    async fn passes_with_complete_readings() {
        let topology = topology().with_component(
            ComponentSpec::transceiver("FourHundredGigE0/0/0/1")
                .with_mfg_name("CISCO-INNOLIGHT")
                .with_channel(-1.2, 0.4, 38.0)
                .with_channel(-1.4, 0.3, 37.5),
        );
        let report = check_inventory(&SimulatedDut::new(topology)).await;

        assert_eq!(report.verdict(), Verdict::Passed);
    }

    #[tokio::test]
    async fn skips_transceiver_without_mfg_name() {
        let topology = topology()
            .with_component(ComponentSpec::transceiver("FourHundredGigE0/0/0/2"))
            .with_component(
                ComponentSpec::transceiver("FourHundredGigE0/0/0/1")
                    .with_mfg_name("CISCO-INNOLIGHT")
                    .with_channel(-1.2, 0.4, 38.0),
            );
        let report = check_inventory(&SimulatedDut::new(topology)).await;

        assert_eq!(report.verdict(), Verdict::Passed);
        assert_eq!(report.errors().count(), 0);
    }

    #[tokio::test]
    async fn reports_each_empty_leaf_and_continues() {
        let only_input = ChannelSpec {
            input_power: Some(-3.0),
            ..ChannelSpec::default()
        };
        let topology = topology()
            .with_component(
                ComponentSpec::transceiver("FourHundredGigE0/0/0/1")
                    .with_mfg_name("CISCO-INNOLIGHT")
                    .with_raw_channel(only_input),
            )
            .with_component(ComponentSpec::transceiver("FourHundredGigE0/0/0/2").with_mfg_name("FINISAR"));
        let report = check_inventory(&SimulatedDut::new(topology)).await;

        assert_eq!(report.verdict(), Verdict::Failed);
        let errors: Vec<&str> = report.errors().collect();
        assert_eq!(errors.len(), 5);
        assert!(errors[0].contains("outputPowers"));
        assert!(errors[1].contains("biasCurrents"));
        assert!(errors[2].contains("inputPowers") && errors[2].contains("0/0/0/2"));
    }
}
