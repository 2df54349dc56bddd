use std::path::Path;
use std::time::Instant;

use optics_common::{config::Config, report::SuiteReport};
use optics_core::checks::inventory;
use tracing::Instrument;

use crate::terminal::spinner;

use super::{load_dut, summary};

pub async fn inventory(topology: &Path, cfg: &Config) -> anyhow::Result<()> {
    let dut = load_dut(topology)?;
    let start_time = Instant::now();

    let span = spinner::check_span(inventory::CASE_NAME);
    let report = inventory::check_inventory(&dut).instrument(span).await;

    let mut suite = SuiteReport::new();
    suite.push(report);
    summary::checks_end(&suite, start_time.elapsed(), cfg)
}
