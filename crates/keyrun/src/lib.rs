// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test runner.
//!
//! Feeds every `*.txt` fixture in a test directory to an executable on stdin
//! and compares what it prints with the key file of the same name. A fixture
//! passes only when the executable exits 0, writes nothing to stderr, and its
//! stdout equals the key once carriage returns are dropped from both.
//!
//! With `--update-keys`, a clean run whose output differs rewrites the key
//! instead of failing.

pub mod cli;
pub mod compare;
pub mod config;
pub mod diagnostic;
pub mod diff;
pub mod fixture;
pub mod harness;
pub mod outcome;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_support;
