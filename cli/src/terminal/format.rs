use colored::*;
use optics_common::report::Verdict;

pub fn verdict(verdict: Verdict) -> ColoredString {
    let text = verdict.to_string();
    match verdict {
        Verdict::Passed => text.green().bold(),
        Verdict::Skipped => text.yellow().bold(),
        Verdict::Failed => text.red().bold(),
        Verdict::Aborted => text.bright_red().bold().underline(),
    }
}
