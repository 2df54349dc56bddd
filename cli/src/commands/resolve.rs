use colored::*;
use optics_common::{config::Config, device::vendor::Vendor};
use optics_core::transceiver;

use crate::terminal::print;

pub fn resolve(interface: &str, vendor: Vendor, cfg: &Config) -> anyhow::Result<()> {
    let name = transceiver::transceiver_name(interface, vendor)?;

    if cfg.quiet > 1 {
        print::print(&name);
        return Ok(());
    }

    print::aligned_line("Interface", interface);
    print::aligned_line("Vendor", vendor.to_string());
    print::aligned_line("Transceiver", format!("{name:?}").green().bold());
    Ok(())
}
