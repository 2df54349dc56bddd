#![cfg(test)]
use std::time::Duration;

use optics_common::config::Config;
use optics_common::device::vendor::Vendor;
use optics_common::ports::InterfaceTelemetry;
use optics_common::device::interface::OperStatus;
use optics_common::report::Verdict;
use optics_core::checks::{self, power_update};
use optics_core::simulator::SimulatedDut;
use optics_core::simulator::topology::Topology;
use optics_core::transceiver;

use crate::fixtures::{self, fast_config, single_port_lab};

fn verdicts(suite: &optics_common::report::SuiteReport) -> Vec<Verdict> {
    suite.cases.iter().map(|case| case.verdict()).collect()
}

#[tokio::test]
async fn full_run_on_lab_topology_passes() {
    let topology = Topology::load(&fixtures::fixture_path("arista_lab.json")).unwrap();
    let dut = SimulatedDut::new(topology);

    let suite = checks::run_all(&dut, &fast_config()).await;

    assert_eq!(suite.cases.len(), 4);
    assert!(suite.passed(), "{suite:#?}");
    assert_eq!(suite.count(Verdict::Passed), 4);
    // Re-enabled at the end.
    assert_eq!(dut.oper_status("Ethernet1/1/1").await.unwrap(), OperStatus::Up);
}

#[tokio::test]
async fn second_port_can_be_selected() {
    let topology = Topology::load(&fixtures::fixture_path("arista_lab.json")).unwrap();
    let dut = SimulatedDut::new(topology);
    let cfg = Config {
        port_id: "port2".to_string(),
        ..fast_config()
    };

    let suite = power_update::check_power_update(&dut, &cfg, &power_update::default_cases()).await;

    assert!(suite.passed(), "{suite:#?}");
    assert!(suite.cases[1]
        .entries
        .iter()
        .any(|entry| format!("{entry:?}").contains("Ethernet2/1 transceiver")));
}

#[tokio::test]
async fn vendors_with_plain_naming_pass() {
    for (vendor, interface) in [
        (Vendor::Juniper, "Ethernet1/1"),
        (Vendor::Cisco, "HundredGigE0/0/0/1"),
    ] {
        let name = transceiver::transceiver_name(interface, vendor).unwrap();
        assert_eq!(name, interface);

        let dut = SimulatedDut::new(single_port_lab(vendor, interface, &name));
        let suite = power_update::check_power_update(&dut, &fast_config(), &power_update::default_cases()).await;
        assert!(suite.passed(), "{vendor}: {suite:#?}");
    }
}

#[tokio::test]
async fn unmapped_vendor_aborts_every_case() {
    let dut = SimulatedDut::new(single_port_lab(Vendor::Nokia, "ethernet-1/1", "ethernet-1/1"));
    let suite = power_update::check_power_update(&dut, &fast_config(), &power_update::default_cases()).await;

    assert_eq!(verdicts(&suite), vec![Verdict::Aborted; 3]);
    assert!(suite.cases[0].fatal.as_deref().unwrap().contains("NOKIA"));
}

#[tokio::test]
async fn await_timeout_aborts_only_its_case() {
    let topology = single_port_lab(Vendor::Arista, "Ethernet5/1/1", "Ethernet5/1 transceiver")
        .with_settle_time_ms(60_000);
    let dut = SimulatedDut::new(topology);
    let cfg = Config {
        oper_status_timeout: Duration::from_millis(40),
        ..fast_config()
    };

    let suite = power_update::check_power_update(&dut, &cfg, &power_update::default_cases()).await;

    // Enabled at boot, never goes down in time, and is still up for the re-enable.
    assert_eq!(
        verdicts(&suite),
        vec![Verdict::Passed, Verdict::Aborted, Verdict::Passed]
    );
    let fatal = suite.cases[1].fatal.as_deref().unwrap();
    assert!(fatal.contains("DOWN") && fatal.contains("Ethernet5/1/1"), "{fatal}");
}

#[tokio::test]
async fn out_of_range_input_power_fails_every_case() {
    let mut topology = single_port_lab(Vendor::Arista, "Ethernet7/1/1", "Ethernet7/1 transceiver");
    topology.components[0].channels[0].input_power = Some(-35.5);
    let dut = SimulatedDut::new(topology);

    let suite = power_update::check_power_update(&dut, &fast_config(), &power_update::default_cases()).await;

    assert_eq!(verdicts(&suite), vec![Verdict::Failed; 3]);
    for case in &suite.cases {
        let errors: Vec<&str> = case.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Get inputPower for port \"Ethernet7/1/1\": got -35.50"));
    }
}

#[tokio::test]
async fn hot_laser_fails_upper_bound() {
    let mut topology = single_port_lab(Vendor::Arista, "Ethernet8/1/1", "Ethernet8/1 transceiver");
    topology.components[0].channels[1].output_power = Some(11.0);
    let dut = SimulatedDut::new(topology);

    let suite = power_update::check_power_update(&dut, &fast_config(), &power_update::default_cases()).await;

    // Dark while disabled, so only the enabled cases see the hot channel.
    assert_eq!(
        verdicts(&suite),
        vec![Verdict::Failed, Verdict::Passed, Verdict::Failed]
    );
    let errors: Vec<&str> = suite.cases[0].errors().collect();
    assert_eq!(
        errors,
        vec!["Get outPower for port \"Ethernet8/1/1\": got 11.00, want < 10.000000"]
    );
}
