// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for end-to-end keyrun tests: a throwaway suite directory
//! with an executable under test, input fixtures and keys.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Executable that adds the two integers it reads from stdin.
pub const ADDER: &str = r#"read a b; echo $((a + b))"#;

pub struct Suite {
    pub dir: TempDir,
}

impl Suite {
    /// Create `bin`, `tests/` and `keys/` with `bin` running `body` under sh.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        fs::create_dir(dir.path().join("keys")).unwrap();
        let suite = Self { dir };
        suite.set_bin(body);
        suite
    }

    pub fn set_bin(&self, body: &str) {
        let bin = self.bin();
        fs::write(&bin, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin(&self) -> PathBuf {
        self.root().join("bin")
    }

    pub fn tests(&self) -> PathBuf {
        self.root().join("tests")
    }

    pub fn keys(&self) -> PathBuf {
        self.root().join("keys")
    }

    pub fn input(&self, name: &str, content: &str) -> &Self {
        fs::write(self.tests().join(name), content).unwrap();
        self
    }

    pub fn key(&self, name: &str, content: &str) -> &Self {
        fs::write(self.keys().join(name), content).unwrap();
        self
    }

    pub fn read_key(&self, name: &str) -> Vec<u8> {
        fs::read(self.keys().join(name)).unwrap()
    }

    /// `--bin`, `--test-dir` and `--key-dir` pointing at this suite.
    pub fn path_args(&self) -> Vec<String> {
        vec![
            "--bin".to_string(),
            self.bin().display().to_string(),
            "--test-dir".to_string(),
            self.tests().display().to_string(),
            "--key-dir".to_string(),
            self.keys().display().to_string(),
        ]
    }
}
