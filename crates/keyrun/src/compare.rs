// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output comparison and key auto-update.
//!
//! Both sides are decoded as UTF-8 with replacement characters for invalid
//! sequences, then normalized by dropping every `\r`. Nothing else is
//! trimmed or rewritten.

use crate::runner::ExecutionResult;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Failed to read key {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to update key {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Decode captured bytes, substituting U+FFFD for invalid UTF-8.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Strip carriage returns. Idempotent.
pub fn normalize(text: &str) -> String {
    text.replace('\r', "")
}

/// Whether the ratchet may overwrite a key with this run's output.
///
/// Only a clean run (exit 0, empty stderr) whose content differs qualifies.
pub fn should_update(result: &ExecutionResult, content_matches: bool) -> bool {
    result.is_clean() && !content_matches
}

/// Normalized texts of one comparison and how it was settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub expected: String,
    pub actual: String,
    /// The key was rewritten with the actual output during this run
    pub updated: bool,
}

impl Comparison {
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

/// Compares captured output against key files.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator {
    update_keys: bool,
}

impl Comparator {
    pub fn new(update_keys: bool) -> Self {
        Self { update_keys }
    }

    /// Compare `result.stdout` with the key at `key`, rewriting the key when
    /// auto-update is enabled and [`should_update`] allows it.
    pub fn compare(&self, result: &ExecutionResult, key: &Path) -> Result<Comparison, KeyError> {
        let raw = std::fs::read(key).map_err(|source| KeyError::Read {
            path: key.to_path_buf(),
            source,
        })?;

        let mut comparison = Comparison {
            expected: normalize(&decode(&raw)),
            actual: normalize(&decode(&result.stdout)),
            updated: false,
        };

        if self.update_keys && should_update(result, comparison.matches()) {
            std::fs::write(key, &result.stdout).map_err(|source| KeyError::Write {
                path: key.to_path_buf(),
                source,
            })?;
            comparison.expected = comparison.actual.clone();
            comparison.updated = true;
        }

        Ok(comparison)
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
