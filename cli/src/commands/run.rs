use std::path::Path;
use std::time::Instant;

use optics_common::config::Config;
use optics_core::checks;
use tracing::Instrument;

use crate::terminal::spinner;

use super::{load_dut, summary};

pub async fn run(topology: &Path, cfg: &Config) -> anyhow::Result<()> {
    let dut = load_dut(topology)?;
    let start_time = Instant::now();

    let span = spinner::check_span("optics checks");
    let suite = checks::run_all(&dut, cfg).instrument(span).await;

    summary::checks_end(&suite, start_time.elapsed(), cfg)
}
