use std::path::Path;
use std::time::Instant;

use optics_common::config::Config;
use optics_core::checks::power_update;
use tracing::Instrument;

use crate::terminal::spinner;

use super::{load_dut, summary};

pub async fn update(topology: &Path, cfg: &Config) -> anyhow::Result<()> {
    let dut = load_dut(topology)?;
    let start_time = Instant::now();

    let span = spinner::check_span(power_update::CASE_NAME);
    let suite = power_update::check_power_update(&dut, cfg, &power_update::default_cases())
        .instrument(span)
        .await;

    summary::checks_end(&suite, start_time.elapsed(), cfg)
}
