// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Messages outside the per-fixture report.
//!
//! Errors that end the run go to stdout next to the report, so a captured
//! stdout always explains a nonzero exit. Warnings and `--verbose` traces go
//! to stderr.

use crate::cli::color_enabled;
use crate::report::{escape, Style};
use std::io::{self, IsTerminal, Write};

/// Severity of a diagnostic, which picks its prefix and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Debug,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Debug => "debug",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Error => escape::RED,
            Level::Warning => escape::YELLOW,
            Level::Debug => escape::DIM,
        }
    }
}

/// Write `<Prefix>: <msg>` as one line, painted when `color` is set.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl std::fmt::Display,
    color: bool,
) -> io::Result<()> {
    let line = format!("{}: {}", level.prefix(), msg);
    writeln!(writer, "{}", Style::new(color).paint(line, level.color()))
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Print a run-ending error to stdout.
pub fn print_error(msg: impl std::fmt::Display) {
    let stdout = io::stdout();
    let color = color_enabled(false, stdout.is_terminal(), no_color_env());
    let mut out = stdout.lock();
    let _ = write_diagnostic(&mut out, Level::Error, msg, color);
    let _ = out.flush();
}

pub fn print_warning(msg: impl std::fmt::Display) {
    to_stderr(Level::Warning, msg);
}

/// Print a trace line when `--verbose` is set.
pub fn print_debug(enabled: bool, msg: impl std::fmt::Display) {
    if enabled {
        to_stderr(Level::Debug, msg);
    }
}

fn to_stderr(level: Level, msg: impl std::fmt::Display) {
    let stderr = io::stderr();
    let color = color_enabled(false, stderr.is_terminal(), no_color_env());
    let _ = write_diagnostic(&mut stderr.lock(), level, msg, color);
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
