// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-fixture outcomes and the run summary.

use crate::diff::RenderedDiff;
use std::path::PathBuf;
use std::time::Duration;

/// Process exit status when every fixture passed.
pub const EXIT_PASSED: i32 = 0;
/// Process exit status when at least one fixture failed.
pub const EXIT_FAILED: i32 = 1;
/// Process exit status for configuration errors.
pub const EXIT_CONFIG: i32 = 2;

/// Stderr lines shown for a failing fixture.
pub const STDERR_HEAD_LINES: usize = 5;

/// Why a fixture failed. A fixture may fail for several reasons at once;
/// they are kept in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// No key file; the executable was not run
    MissingExpectation { path: PathBuf },
    /// The executable could not be started, or its input could not be read
    Execution { message: String },
    /// The executable outlived the deadline and was killed
    Timeout { after: Duration },
    /// Exit code other than zero; `None` when killed by a signal
    NonZeroExit { code: Option<i32> },
    /// Something was written to stderr
    Stderr { head: Vec<String> },
    /// The key could not be read or rewritten
    Key { message: String },
    /// Normalized output differs from the key
    ContentMismatch { diff: RenderedDiff },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass {
        /// The key was rewritten with this run's output
        updated: bool,
    },
    Fail(Vec<Failure>),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass { .. })
    }

    pub fn fail(failure: Failure) -> Self {
        Outcome::Fail(vec![failure])
    }
}

/// First [`STDERR_HEAD_LINES`] lines of decoded stderr.
pub fn stderr_head(stderr: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .take(STDERR_HEAD_LINES)
        .map(str::to_owned)
        .collect()
}

/// Running pass/fail counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    /// Passing fixtures whose key was rewritten
    pub updated: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Pass { updated } => {
                self.passed += 1;
                if *updated {
                    self.updated += 1;
                }
            }
            Outcome::Fail(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// [`EXIT_PASSED`] when nothing failed, [`EXIT_FAILED`] otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            EXIT_PASSED
        } else {
            EXIT_FAILED
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
