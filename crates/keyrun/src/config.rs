// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved run configuration.
//!
//! [`RunConfig`] is built once from the command line (see [`crate::cli`]) and
//! handed by reference to every stage of the run. Nothing mutates it after
//! construction.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default cap on printed diff lines per failing fixture.
pub const DEFAULT_MAX_DIFF_LINES: usize = 80;

/// Default per-fixture deadline in seconds. `0` waits for the child to exit.
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;

/// Configuration-level failures. Any of these aborts the run before a single
/// fixture is evaluated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--bin does not exist: {}", .0.display())]
    BinMissing(PathBuf),

    #[error("--bin is not a file: {}", .0.display())]
    BinNotFile(PathBuf),

    #[error("Test dir not found: {}", .0.display())]
    TestDirMissing(PathBuf),

    #[error("Key dir not found: {}", .0.display())]
    KeyDirMissing(PathBuf),

    #[error("No test files in {}", .0.display())]
    NoFixtures(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve working directory: {0}")]
    Cwd(#[source] std::io::Error),
}

/// Immutable settings for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Executable under test
    pub bin: PathBuf,
    /// Directory of `*.txt` input fixtures
    pub test_dir: PathBuf,
    /// Directory of expected outputs, same filenames as the inputs
    pub key_dir: PathBuf,
    /// Only run fixtures whose filename contains this substring
    pub filter: Option<String>,
    /// Suppress PASS lines
    pub quiet: bool,
    /// Emit ANSI colors in the report
    pub color: bool,
    /// Diff lines shown per failing fixture before truncation
    pub max_diff_lines: usize,
    /// Stop after the first failing fixture
    pub stop_on_fail: bool,
    /// Rewrite keys when a clean run produced different output
    pub update_keys: bool,
    /// Per-fixture deadline; `None` waits forever
    pub timeout: Option<Duration>,
    /// Print debug traces to stderr
    pub verbose: bool,
}

impl RunConfig {
    /// Create a configuration with defaults for everything but the paths.
    ///
    /// No deadline is set; see [`RunConfig::timeout`].
    pub fn new(
        bin: impl Into<PathBuf>,
        test_dir: impl Into<PathBuf>,
        key_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bin: bin.into(),
            test_dir: test_dir.into(),
            key_dir: key_dir.into(),
            filter: None,
            quiet: false,
            color: false,
            max_diff_lines: DEFAULT_MAX_DIFF_LINES,
            stop_on_fail: false,
            update_keys: false,
            timeout: None,
            verbose: false,
        }
    }

    /// Check the paths before any fixture runs.
    ///
    /// Reports the first problem found: executable, test dir, key dir.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bin.exists() {
            return Err(ConfigError::BinMissing(self.bin.clone()));
        }
        if !self.bin.is_file() {
            return Err(ConfigError::BinNotFile(self.bin.clone()));
        }
        if !self.test_dir.is_dir() {
            return Err(ConfigError::TestDirMissing(self.test_dir.clone()));
        }
        if !self.key_dir.is_dir() {
            return Err(ConfigError::KeyDirMissing(self.key_dir.clone()));
        }
        Ok(())
    }
}

/// Resolve `path` against `cwd` when relative, canonicalizing when possible.
///
/// Paths that do not exist are returned joined but not canonicalized so that
/// validation can report them verbatim.
pub fn resolve_from(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
