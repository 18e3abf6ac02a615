// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use crate::config::{
    resolve_from, ConfigError, RunConfig, DEFAULT_MAX_DIFF_LINES, DEFAULT_TIMEOUT_SECS,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Run BIN < test.txt for every fixture and compare stdout with its key file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "keyrun",
    version,
    about = "Run BIN < test.txt and compare stdout with key file"
)]
pub struct Cli {
    /// Path to the executable under test [default: `bin` beside keyrun]
    #[arg(short = 'b', long, env = "KEYRUN_BIN", value_name = "PATH")]
    pub bin: Option<PathBuf>,

    /// Directory with input .txt files [default: `tests` beside keyrun]
    #[arg(short = 't', long, env = "KEYRUN_TEST_DIR", value_name = "DIR")]
    pub test_dir: Option<PathBuf>,

    /// Directory with expected .txt files [default: `keys` beside keyrun]
    #[arg(short = 'k', long, env = "KEYRUN_KEY_DIR", value_name = "DIR")]
    pub key_dir: Option<PathBuf>,

    /// Run only tests whose filename contains this substring
    #[arg(short = 'm', long = "match", value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Do not print PASS tests, only FAIL
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Max number of diff lines to show per failed test
    #[arg(long, default_value_t = DEFAULT_MAX_DIFF_LINES, value_name = "N")]
    pub max_diff_lines: usize,

    /// Stop after the first failed test
    #[arg(long)]
    pub stop_on_fail: bool,

    /// If output differs but exit code is 0 and stderr is empty,
    /// overwrite the key file with the actual output
    #[arg(long)]
    pub update_keys: bool,

    /// Kill the executable after this many seconds (0 waits forever)
    #[arg(
        long,
        env = "KEYRUN_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_name = "SECONDS"
    )]
    pub timeout: u64,

    /// Print per-fixture execution details to stderr
    #[arg(short, long, env = "KEYRUN_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve defaults and relative paths against the process environment.
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::Cwd)?;
        let base = harness_dir().unwrap_or_else(|| cwd.clone());
        let color = color_enabled(
            self.no_color,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        );
        Ok(self.resolve(&cwd, &base, color))
    }

    /// Build the configuration with explicit working and harness directories.
    pub fn resolve(self, cwd: &Path, base: &Path, color: bool) -> RunConfig {
        let path_or = |given: Option<PathBuf>, default: &str| match given {
            Some(p) => resolve_from(cwd, &p),
            None => resolve_from(base, Path::new(default)),
        };

        RunConfig {
            filter: self.filter.filter(|f| !f.is_empty()),
            quiet: self.quiet,
            color,
            max_diff_lines: self.max_diff_lines,
            stop_on_fail: self.stop_on_fail,
            update_keys: self.update_keys,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            verbose: self.verbose,
            ..RunConfig::new(
                path_or(self.bin, "bin"),
                path_or(self.test_dir, "tests"),
                path_or(self.key_dir, "keys"),
            )
        }
    }
}

/// Directory holding the running keyrun executable.
pub fn harness_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Colors need a terminal on stdout and no opt-out from flag or `NO_COLOR`.
pub fn color_enabled(no_color_flag: bool, stdout_is_tty: bool, no_color_env: bool) -> bool {
    stdout_is_tty && !no_color_flag && !no_color_env
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
