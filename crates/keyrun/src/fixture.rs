// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture discovery.
//!
//! A fixture is a `*.txt` file in the test directory. Its key lives in the
//! key directory under the same filename; whether that key exists is only
//! checked when the fixture is evaluated.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// File extension that marks an input fixture.
pub const FIXTURE_EXTENSION: &str = "txt";

/// One input file and the key it is compared against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// Filename, e.g. `add.txt`
    pub name: String,
    /// Full path of the input file
    pub input: PathBuf,
    /// Full path of the expected output
    pub key: PathBuf,
}

impl Fixture {
    /// Build the fixture for `input`, pairing it with `key_dir/<filename>`.
    pub fn new(input: PathBuf, key_dir: &Path) -> Option<Self> {
        let name = input.file_name()?.to_string_lossy().into_owned();
        let key = key_dir.join(&name);
        Some(Self { name, input, key })
    }

    /// Read the raw input payload.
    pub fn read_input(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.input)
    }
}

/// Whether a filename passes the optional `--match` filter.
pub fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|f| name.contains(f))
}

/// List the fixtures in `test_dir`, sorted by filename.
///
/// Returns [`ConfigError::NoFixtures`] when nothing survives the filter.
pub fn discover(
    test_dir: &Path,
    key_dir: &Path,
    filter: Option<&str>,
) -> Result<Vec<Fixture>, ConfigError> {
    let entries = std::fs::read_dir(test_dir).map_err(|source| ConfigError::ListDir {
        path: test_dir.to_path_buf(),
        source,
    })?;
    select(test_dir, key_dir, filter, entries.map(|e| e.map(|e| e.path())))
}

/// Pick the fixtures out of a directory listing.
///
/// An entry that cannot be read aborts the listing with
/// [`ConfigError::ListDir`].
fn select(
    test_dir: &Path,
    key_dir: &Path,
    filter: Option<&str>,
    paths: impl IntoIterator<Item = std::io::Result<PathBuf>>,
) -> Result<Vec<Fixture>, ConfigError> {
    let mut fixtures = Vec::new();
    for path in paths {
        let path = path.map_err(|source| ConfigError::ListDir {
            path: test_dir.to_path_buf(),
            source,
        })?;
        if !path.is_file() || !path.extension().is_some_and(|e| e == FIXTURE_EXTENSION) {
            continue;
        }
        if let Some(fixture) = Fixture::new(path, key_dir) {
            if matches_filter(&fixture.name, filter) {
                fixtures.push(fixture);
            }
        }
    }

    if fixtures.is_empty() {
        return Err(ConfigError::NoFixtures(test_dir.to_path_buf()));
    }

    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fixtures)
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
