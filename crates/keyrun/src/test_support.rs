// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests that need a real executable and fixture tree.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable `/bin/sh` script named `name` into `dir`.
pub fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A temporary `bin` + `tests/` + `keys/` layout.
pub struct Suite {
    pub dir: TempDir,
    pub bin: PathBuf,
    pub tests: PathBuf,
    pub keys: PathBuf,
}

impl Suite {
    /// Create a suite whose executable runs `body`.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let tests = dir.path().join("tests");
        let keys = dir.path().join("keys");
        fs::create_dir(&tests).unwrap();
        fs::create_dir(&keys).unwrap();
        let bin = script(dir.path(), "bin", body);
        Self {
            dir,
            bin,
            tests,
            keys,
        }
    }

    /// Add an input fixture and, when `key` is given, its expected output.
    pub fn fixture(&self, name: &str, input: &str, key: Option<&str>) -> &Self {
        fs::write(self.tests.join(name), input).unwrap();
        if let Some(key) = key {
            fs::write(self.keys.join(name), key).unwrap();
        }
        self
    }

    pub fn key(&self, name: &str) -> String {
        fs::read_to_string(self.keys.join(name)).unwrap()
    }
}
