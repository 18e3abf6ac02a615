// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console report: run header, one status line per fixture, failure details
//! and the totals line.

use crate::config::RunConfig;
use crate::outcome::{Failure, Outcome, RunSummary, STDERR_HEAD_LINES};
use std::io::{self, Write};

/// ANSI escape sequences used by the report.
pub mod escape {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Indentation for detail labels under a FAIL line.
const LABEL_INDENT: &str = "  ";
/// Indentation for stderr and diff bodies.
const BODY_INDENT: &str = "    ";

/// Wraps text in color codes when enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: impl std::fmt::Display, code: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, escape::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: impl std::fmt::Display) -> String {
        self.paint(text, escape::RED)
    }

    pub fn green(&self, text: impl std::fmt::Display) -> String {
        self.paint(text, escape::GREEN)
    }

    pub fn yellow(&self, text: impl std::fmt::Display) -> String {
        self.paint(text, escape::YELLOW)
    }

    pub fn dim(&self, text: impl std::fmt::Display) -> String {
        self.paint(text, escape::DIM)
    }
}

/// Writes the report and keeps the running counters.
pub struct Reporter<W: Write> {
    out: W,
    style: Style,
    quiet: bool,
    summary: RunSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, style: Style, quiet: bool) -> Self {
        Self {
            out,
            style,
            quiet,
            summary: RunSummary::default(),
        }
    }

    pub fn from_config(out: W, config: &RunConfig) -> Self {
        Self::new(out, Style::new(config.color), config.quiet)
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the resolved paths and filter, followed by a blank line.
    pub fn header(&mut self, config: &RunConfig) -> io::Result<()> {
        let s = self.style;
        writeln!(self.out, "{}", s.dim(format_args!("BIN: {}", config.bin.display())))?;
        writeln!(
            self.out,
            "{}",
            s.dim(format_args!("TEST_DIR: {}", config.test_dir.display()))
        )?;
        writeln!(
            self.out,
            "{}",
            s.dim(format_args!("KEY_DIR: {}", config.key_dir.display()))
        )?;
        if let Some(ref filter) = config.filter {
            writeln!(self.out, "{}", s.dim(format_args!("FILTER: '{}'", filter)))?;
        }
        writeln!(self.out)
    }

    /// Count `outcome` and print its status line and details.
    pub fn record(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        self.summary.record(outcome);
        match outcome {
            Outcome::Pass { updated } => self.write_pass(name, *updated),
            Outcome::Fail(failures) => self.write_fail(name, failures),
        }
    }

    fn write_pass(&mut self, name: &str, updated: bool) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let s = self.style;
        if updated {
            writeln!(
                self.out,
                "[{}] {}  {}",
                s.green("PASS"),
                name,
                s.dim("(key updated)")
            )
        } else {
            writeln!(self.out, "[{}] {}", s.green("PASS"), name)
        }
    }

    fn write_fail(&mut self, name: &str, failures: &[Failure]) -> io::Result<()> {
        let s = self.style;
        let missing = failures.iter().find_map(|f| match f {
            Failure::MissingExpectation { path } => Some(path),
            _ => None,
        });
        match missing {
            Some(path) => writeln!(
                self.out,
                "[{}] {}  {}",
                s.red("FAIL"),
                name,
                s.dim(format_args!("(missing expected: {})", path.display()))
            )?,
            None => writeln!(self.out, "[{}] {}", s.red("FAIL"), name)?,
        }
        for failure in failures {
            self.write_failure(failure)?;
        }
        Ok(())
    }

    fn write_failure(&mut self, failure: &Failure) -> io::Result<()> {
        let s = self.style;
        match failure {
            // Printed on the status line.
            Failure::MissingExpectation { .. } => Ok(()),
            Failure::Execution { message } => writeln!(
                self.out,
                "{}{} {}",
                LABEL_INDENT,
                s.yellow("Execution error:"),
                message
            ),
            Failure::Timeout { after } => writeln!(
                self.out,
                "{}{} {:?}",
                LABEL_INDENT,
                s.yellow("Timed out after"),
                after
            ),
            Failure::NonZeroExit { code } => match code {
                Some(code) => writeln!(
                    self.out,
                    "{}{} {}",
                    LABEL_INDENT,
                    s.yellow("Exit status:"),
                    code
                ),
                None => writeln!(
                    self.out,
                    "{}{} terminated by signal",
                    LABEL_INDENT,
                    s.yellow("Exit status:")
                ),
            },
            Failure::Stderr { head } => {
                writeln!(
                    self.out,
                    "{}{}",
                    LABEL_INDENT,
                    s.yellow(format_args!("Stderr (first {} lines):", STDERR_HEAD_LINES))
                )?;
                for line in head {
                    writeln!(self.out, "{}{}", BODY_INDENT, line)?;
                }
                Ok(())
            }
            Failure::Key { message } => writeln!(
                self.out,
                "{}{} {}",
                LABEL_INDENT,
                s.yellow("Key error:"),
                message
            ),
            Failure::ContentMismatch { diff } => {
                writeln!(self.out, "{}{}", LABEL_INDENT, s.yellow("Diff:"))?;
                for line in diff.display_lines() {
                    writeln!(self.out, "{}{}", BODY_INDENT, line)?;
                }
                Ok(())
            }
        }
    }

    /// Print the blank separator and `Total: n  pass: p  fail: f`.
    pub fn totals(&mut self) -> io::Result<()> {
        let s = self.style;
        let summary = self.summary;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Total: {}  {} {}  {} {}",
            summary.total(),
            s.green("pass:"),
            summary.passed,
            s.red("fail:"),
            summary.failed
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
