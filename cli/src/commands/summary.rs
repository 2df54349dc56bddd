use std::time::Duration;

use colored::*;
use optics_common::config::Config;
use optics_common::report::{CaseReport, Entry, SuiteReport, Verdict};

use crate::mprint;
use crate::terminal::{colors, format, print};

type Detail = (String, ColoredString);

/// Prints every case and the summary, failing when any case failed or aborted.
pub fn checks_end(suite: &SuiteReport, total_time: Duration, cfg: &Config) -> anyhow::Result<()> {
    let quiet = cfg.quiet;

    print::header("optics results", quiet);
    if quiet < 2 {
        print_cases(suite);
    }
    print_summary(suite, total_time, quiet);

    let broken = suite.count(Verdict::Failed) + suite.count(Verdict::Aborted);
    anyhow::ensure!(suite.passed(), "{broken} of {} checks did not pass", suite.cases.len());
    Ok(())
}

fn print_cases(suite: &SuiteReport) {
    for (idx, case) in suite.cases.iter().enumerate() {
        print_case_tree(case, idx);
        if idx + 1 != suite.cases.len() {
            mprint!();
        }
    }
}

fn print_case_tree(case: &CaseReport, idx: usize) {
    print::tree_head(idx, &case.name);

    let mut details: Vec<Detail> = vec![
        ("Result".to_string(), format::verdict(case.verdict())),
        ("Time".to_string(), format!("{:.2}s", case.elapsed.as_secs_f64()).normal()),
    ];

    if let Some(reason) = &case.skip_reason {
        details.push(("Skip".to_string(), reason.as_str().yellow()));
    }

    if let Some(fatal) = &case.fatal {
        details.push(("Fatal".to_string(), fatal.as_str().red().bold()));
    }

    for entry in &case.entries {
        if let Entry::Error(msg) = entry {
            details.push(("Error".to_string(), msg.as_str().red()));
        }
    }

    print::as_tree_one_level(details);
}

fn print_summary(suite: &SuiteReport, total_time: Duration, quiet: u8) {
    let passed: ColoredString = format!("{} passed", suite.count(Verdict::Passed)).bold().green();
    let skipped: ColoredString = format!("{} skipped", suite.count(Verdict::Skipped)).bold().yellow();
    let failed: ColoredString = format!(
        "{} failed",
        suite.count(Verdict::Failed) + suite.count(Verdict::Aborted)
    )
    .bold()
    .red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Checks Complete: {passed}, {skipped}, {failed} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            print::print(&output.to_string());
        }
    }
}
