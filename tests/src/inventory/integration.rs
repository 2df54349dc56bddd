#![cfg(test)]
use optics_common::report::Verdict;
use optics_common::device::vendor::Vendor;
use optics_core::checks::inventory;
use optics_core::simulator::SimulatedDut;
use optics_core::simulator::topology::{ChannelSpec, ComponentSpec, Topology};

use crate::fixtures;

#[tokio::test]
async fn lab_topology_passes_inventory() {
    let topology = Topology::load(&fixtures::fixture_path("arista_lab.json")).unwrap();
    let dut = SimulatedDut::new(topology);

    let report = inventory::check_inventory(&dut).await;

    assert_eq!(report.verdict(), Verdict::Passed, "{report:#?}");
    // The empty cage is logged and skipped, the linecard is never visited.
    assert!(report
        .entries
        .iter()
        .any(|entry| format!("{entry:?}").contains("Ethernet3/1 transceiver")));
    assert!(!report
        .entries
        .iter()
        .any(|entry| format!("{entry:?}").contains("Linecard1")));
}

#[tokio::test]
async fn zero_transceivers_is_fatal() {
    let topology = Topology::new("dut", "PTX10008", Vendor::Juniper)
        .with_port("port1", "et-0/0/0")
        .with_component(ComponentSpec {
            kind: optics_common::device::component::ComponentType::Linecard,
            ..ComponentSpec::transceiver("FPC0")
        });
    let report = inventory::check_inventory(&SimulatedDut::new(topology)).await;

    assert_eq!(report.verdict(), Verdict::Aborted);
    let fatal = report.fatal.unwrap();
    assert!(fatal.contains("PTX10008"), "{fatal}");
    assert!(fatal.contains("got 0, want > 0"), "{fatal}");
}

#[tokio::test]
async fn empty_bias_list_fails_but_checks_remaining_transceivers() {
    let no_bias = ChannelSpec {
        input_power: Some(-2.0),
        output_power: Some(-1.0),
        laser_bias_current: None,
    };
    let topology = Topology::new("dut", "8808", Vendor::Cisco)
        .with_port("port1", "FourHundredGigE0/0/0/0")
        .with_component(
            ComponentSpec::transceiver("FourHundredGigE0/0/0/0")
                .with_mfg_name("CISCO-FINISAR")
                .with_raw_channel(no_bias),
        )
        .with_component(
            ComponentSpec::transceiver("FourHundredGigE0/0/0/1")
                .with_mfg_name("CISCO-FINISAR"),
        );
    let report = inventory::check_inventory(&SimulatedDut::new(topology)).await;

    assert_eq!(report.verdict(), Verdict::Failed);
    let errors: Vec<&str> = report.errors().collect();
    assert_eq!(
        errors,
        vec![
            "Get biasCurrents list for \"FourHundredGigE0/0/0/0\": got 0, want > 0",
            "Get inputPowers list for \"FourHundredGigE0/0/0/1\": got 0, want > 0",
            "Get outputPowers list for \"FourHundredGigE0/0/0/1\": got 0, want > 0",
            "Get biasCurrents list for \"FourHundredGigE0/0/0/1\": got 0, want > 0",
        ]
    );
}

#[tokio::test]
async fn missing_topology_file_is_reported() {
    let err = Topology::load(&fixtures::fixture_path("does_not_exist.json")).unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.json"));
}
