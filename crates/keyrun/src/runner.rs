// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner for the executable under test.
//!
//! Each fixture gets a fresh child process: the payload goes to stdin, stdout
//! and stderr are drained concurrently so a chatty child cannot deadlock on a
//! full pipe, and the exit status is collected last. The child is killed and
//! reaped if it outlives the deadline.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};

/// What one invocation produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code; `None` when the child was terminated by a signal
    pub code: Option<i32>,
    /// Raw bytes written to stdout
    pub stdout: Vec<u8>,
    /// Raw bytes written to stderr
    pub stderr: Vec<u8>,
    /// Wall time from spawn to exit
    pub elapsed: Duration,
}

impl ExecutionResult {
    /// Exit code zero.
    pub fn exited_ok(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code zero and nothing on stderr.
    pub fn is_clean(&self) -> bool {
        self.exited_ok() && self.stderr.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to spawn {}: {source}", bin.display())]
    Spawn {
        bin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while talking to the child: {0}")]
    Io(#[from] io::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Runs one executable, once per call to [`ProcessRunner::run`].
#[derive(Clone, Debug)]
pub struct ProcessRunner {
    bin: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            timeout: None,
        }
    }

    /// Set the per-invocation deadline. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Spawn the executable, feed `input` on stdin and wait for it to exit.
    pub async fn run(&self, input: &[u8]) -> Result<ExecutionResult, RunError> {
        let started = Instant::now();
        let mut child = Command::new(&self.bin)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        let collected = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, collect(&mut child, input)).await {
                Ok(result) => result,
                Err(_) => {
                    // kill() also waits, so no zombie is left behind
                    let _ = child.kill().await;
                    return Err(RunError::Timeout(limit));
                }
            },
            None => collect(&mut child, input).await,
        };

        let (code, stdout, stderr) = collected?;
        Ok(ExecutionResult {
            code,
            stdout,
            stderr,
            elapsed: started.elapsed(),
        })
    }
}

type Collected = (Option<i32>, Vec<u8>, Vec<u8>);

async fn collect(child: &mut Child, input: &[u8]) -> Result<Collected, RunError> {
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (fed, out, err) = tokio::join!(feed(stdin, input), drain(stdout), drain(stderr));
    fed?;
    let out = out?;
    let err = err?;

    let status = child.wait().await?;
    Ok((status.code(), out, err))
}

/// Write the payload and close stdin. A child that exits without reading its
/// input is not an error.
async fn feed(stdin: Option<ChildStdin>, input: &[u8]) -> io::Result<()> {
    let Some(mut pipe) = stdin else {
        return Ok(());
    };
    match pipe.write_all(input).await {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(()),
    }
}

async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
