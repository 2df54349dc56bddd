//! # Check Reports
//!
//! Every check writes into a [`CaseReport`], mirroring how a test reports:
//! log lines, non-fatal errors (the case keeps running), a skip, or a fatal abort.
//! Each entry is also emitted as a `tracing` event as it is recorded.

use std::fmt;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::OpticsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// At least one non-fatal error was recorded.
    Failed,
    /// The case did not apply to this device.
    Skipped,
    /// A fatal error ended the case early.
    Aborted,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Passed => "PASS",
            Verdict::Failed => "FAIL",
            Verdict::Skipped => "SKIP",
            Verdict::Aborted => "ABORT",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Log(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub entries: Vec<Entry>,
    pub skip_reason: Option<String>,
    pub fatal: Option<String>,
    pub elapsed: Duration,
}

impl CaseReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            skip_reason: None,
            fatal: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn log(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        info!("{msg}");
        self.entries.push(Entry::Log(msg));
    }

    /// Records a non-fatal failure. The case keeps running.
    pub fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        error!("{msg}");
        self.entries.push(Entry::Error(msg));
    }

    pub fn skip(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("{reason}");
        self.skip_reason = Some(reason);
    }

    pub fn abort(&mut self, err: &OpticsError) {
        error!("{}: {err}", self.name);
        self.fatal = Some(err.to_string());
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Error(msg) => Some(msg.as_str()),
            Entry::Log(_) => None,
        })
    }

    pub fn verdict(&self) -> Verdict {
        if self.fatal.is_some() {
            Verdict::Aborted
        } else if self.errors().next().is_some() {
            Verdict::Failed
        } else if self.skip_reason.is_some() {
            Verdict::Skipped
        } else {
            Verdict::Passed
        }
    }
}

/// Ordered results of every case that ran.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn extend(&mut self, other: SuiteReport) {
        self.cases.extend(other.cases);
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.cases
            .iter()
            .filter(|case| case.verdict() == verdict)
            .count()
    }

    /// True when no case failed or aborted. Skips do not count against the suite.
    pub fn passed(&self) -> bool {
        self.cases
            .iter()
            .all(|case| matches!(case.verdict(), Verdict::Passed | Verdict::Skipped))
    }
}
