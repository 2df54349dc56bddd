use std::path::PathBuf;
use std::time::Duration;

use optics_common::{config::Config, device::vendor::Vendor};
use optics_core::simulator::topology::{ComponentSpec, Topology};

/// Short timings so a full run stays well under a second.
pub fn fast_config() -> Config {
    Config {
        oper_status_timeout: Duration::from_millis(750),
        poll_interval: Duration::from_millis(2),
        ..Config::default()
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

/// A single-port lab whose transceiver is named after `interface` per `vendor`.
pub fn single_port_lab(vendor: Vendor, interface: &str, transceiver: &str) -> Topology {
    Topology::new("dut", "lab-model", vendor)
        .with_settle_time_ms(10)
        .with_port("port1", interface)
        .with_component(
            ComponentSpec::transceiver(transceiver)
                .with_mfg_name("FINISAR CORP")
                .linked_to(interface)
                .with_channel(-2.4, -0.9, 6.8)
                .with_channel(-2.6, -1.1, 6.9),
        )
}
