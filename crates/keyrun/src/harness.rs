// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration.
//!
//! Fixtures are evaluated one at a time in sorted order. Evaluating a fixture
//! produces an [`Outcome`] without printing anything; the [`Reporter`] turns
//! outcomes into console output as they arrive.

use crate::compare::Comparator;
use crate::config::{ConfigError, RunConfig};
use crate::diagnostic::{print_debug, print_warning};
use crate::diff;
use crate::fixture::{self, Fixture};
use crate::outcome::{stderr_head, Failure, Outcome, RunSummary};
use crate::report::Reporter;
use crate::runner::{ProcessRunner, RunError};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Evaluates fixtures against one executable.
#[derive(Debug)]
pub struct Harness<'a> {
    config: &'a RunConfig,
    runner: ProcessRunner,
    comparator: Comparator,
}

impl<'a> Harness<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            runner: ProcessRunner::new(&config.bin).with_timeout(config.timeout),
            comparator: Comparator::new(config.update_keys),
        }
    }

    /// Run one fixture through the executable and compare its output.
    pub async fn evaluate(&self, fixture: &Fixture) -> Outcome {
        if !fixture.key.exists() {
            return Outcome::fail(Failure::MissingExpectation {
                path: fixture.key.clone(),
            });
        }

        let input = match fixture.read_input() {
            Ok(input) => input,
            Err(e) => {
                return Outcome::fail(Failure::Execution {
                    message: format!("Failed to read {}: {}", fixture.input.display(), e),
                })
            }
        };

        print_debug(
            self.config.verbose,
            format_args!(
                "{}: feeding {} bytes to {}",
                fixture.name,
                input.len(),
                self.runner.bin().display()
            ),
        );

        let result = match self.runner.run(&input).await {
            Ok(result) => result,
            Err(RunError::Timeout(after)) => return Outcome::fail(Failure::Timeout { after }),
            Err(e) => {
                return Outcome::fail(Failure::Execution {
                    message: e.to_string(),
                })
            }
        };

        print_debug(
            self.config.verbose,
            format_args!(
                "{}: exit {:?} after {:?}, {} bytes stdout, {} bytes stderr",
                fixture.name,
                result.code,
                result.elapsed,
                result.stdout.len(),
                result.stderr.len()
            ),
        );

        let mut failures = Vec::new();
        if !result.exited_ok() {
            failures.push(Failure::NonZeroExit { code: result.code });
        }
        if !result.stderr.is_empty() {
            failures.push(Failure::Stderr {
                head: stderr_head(&result.stderr),
            });
        }

        let mut updated = false;
        match self.comparator.compare(&result, &fixture.key) {
            Ok(comparison) if comparison.matches() => updated = comparison.updated,
            Ok(comparison) => failures.push(Failure::ContentMismatch {
                diff: diff::render(
                    &fixture.name,
                    &comparison.expected,
                    &comparison.actual,
                    self.config.max_diff_lines,
                ),
            }),
            Err(e) => failures.push(Failure::Key {
                message: e.to_string(),
            }),
        }

        if failures.is_empty() {
            Outcome::Pass { updated }
        } else {
            Outcome::Fail(failures)
        }
    }
}

/// Validate the configuration, then evaluate and report every fixture.
///
/// Configuration errors abort before the header is printed. Per-fixture
/// failures never abort the run unless `stop_on_fail` is set.
pub async fn run<W: Write>(config: &RunConfig, out: W) -> Result<RunSummary, HarnessError> {
    config.validate()?;
    let fixtures = fixture::discover(&config.test_dir, &config.key_dir, config.filter.as_deref())?;

    let harness = Harness::new(config);
    let mut reporter = Reporter::from_config(out, config);
    reporter.header(config)?;

    for fixture in &fixtures {
        let outcome = harness.evaluate(fixture).await;
        reporter.record(&fixture.name, &outcome)?;
        if config.stop_on_fail && !outcome.is_pass() {
            break;
        }
    }

    reporter.totals()?;
    let summary = reporter.summary();
    if summary.updated > 0 {
        print_warning(format_args!(
            "rewrote {} key file(s) in {}",
            summary.updated,
            config.key_dir.display()
        ));
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
