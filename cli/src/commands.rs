pub mod inventory;
pub mod resolve;
pub mod run;
pub mod summary;
pub mod update;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use optics_common::config::{Config, DEFAULT_PORT_ID};
use optics_common::device::vendor::Vendor;
use optics_core::simulator::{SimulatedDut, topology::Topology};

#[derive(Parser)]
#[command(name = "optics")]
#[command(about = "Optics telemetry checks for a device under test.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat to only print the summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that every transceiver reports power and bias current
    #[command(alias = "i")]
    Inventory {
        #[command(flatten)]
        topology: TopologyArgs,
    },
    /// Toggle an interface and check that output power follows it
    #[command(alias = "u")]
    Update {
        #[command(flatten)]
        topology: TopologyArgs,
        #[command(flatten)]
        update: UpdateArgs,
    },
    /// Run the inventory and power update checks in order
    #[command(alias = "r")]
    Run {
        #[command(flatten)]
        topology: TopologyArgs,
        #[command(flatten)]
        update: UpdateArgs,
    },
    /// Print the transceiver component name of an interface
    Resolve {
        interface: String,
        #[arg(short, long)]
        vendor: Vendor,
    },
}

#[derive(Args)]
pub struct TopologyArgs {
    /// JSON topology describing the device under test
    #[arg(short, long)]
    pub topology: PathBuf,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Topology port whose interface gets toggled
    #[arg(short, long, default_value = DEFAULT_PORT_ID)]
    pub port: String,

    /// Seconds to wait for the oper status to settle
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    /// Milliseconds between oper status reads
    #[arg(long, default_value_t = 1_000)]
    pub poll_ms: u64,
}

impl UpdateArgs {
    pub fn apply(&self, cfg: &mut Config) {
        cfg.port_id = self.port.clone();
        cfg.oper_status_timeout = Duration::from_secs(self.timeout);
        cfg.poll_interval = Duration::from_millis(self.poll_ms);
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn load_dut(path: &Path) -> anyhow::Result<SimulatedDut> {
    let topology = Topology::load(path)?;
    Ok(SimulatedDut::new(topology))
}
