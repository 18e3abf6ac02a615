#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use crate::test_support::script;

fn runner_for(body: &str) -> (tempfile::TempDir, ProcessRunner) {
    let dir = tempfile::tempdir().unwrap();
    let bin = script(dir.path(), "bin", body);
    (dir, ProcessRunner::new(bin))
}

#[test]
fn test_is_clean_requires_zero_and_empty_stderr() {
    let mut result = ExecutionResult {
        code: Some(0),
        ..Default::default()
    };
    assert!(result.is_clean());

    result.stderr = b"warning\n".to_vec();
    assert!(result.exited_ok());
    assert!(!result.is_clean());

    result.stderr.clear();
    result.code = Some(3);
    assert!(!result.is_clean());

    result.code = None;
    assert!(!result.exited_ok());
}

#[tokio::test]
async fn test_run_feeds_stdin_and_captures_stdout() {
    let (_dir, runner) = runner_for(r#"read a b; echo $((a + b))"#);
    let result = runner.run(b"2 3\n").await.unwrap();
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, b"5\n");
    assert!(result.stderr.is_empty());
}

#[tokio::test]
async fn test_run_captures_stderr_and_exit_code() {
    let (_dir, runner) = runner_for("echo out; echo 'warning: deprecated' >&2; exit 7");
    let result = runner.run(b"").await.unwrap();
    assert_eq!(result.code, Some(7));
    assert_eq!(result.stdout, b"out\n");
    assert_eq!(result.stderr, b"warning: deprecated\n");
}

#[tokio::test]
async fn test_run_passes_bytes_verbatim() {
    let (_dir, runner) = runner_for("cat");
    let payload = b"line\r\n\xff\x00tail";
    let result = runner.run(payload).await.unwrap();
    assert_eq!(result.stdout, payload);
}

#[tokio::test]
async fn test_run_large_payload_does_not_deadlock() {
    let (_dir, runner) = runner_for("cat; cat >&2 </dev/null");
    let payload = vec![b'x'; 1 << 20];
    let result = runner.run(&payload).await.unwrap();
    assert_eq!(result.stdout.len(), payload.len());
}

#[tokio::test]
async fn test_run_child_ignoring_stdin() {
    let (_dir, runner) = runner_for("exec >&-; echo done >&2");
    let payload = vec![b'y'; 1 << 18];
    let result = runner.run(&payload).await.unwrap();
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, b"done\n");
}

#[tokio::test]
async fn test_run_spawn_error_for_missing_bin() {
    let runner = ProcessRunner::new("/no/such/executable");
    let err = runner.run(b"").await.unwrap_err();
    match err {
        RunError::Spawn { bin, .. } => assert_eq!(bin, PathBuf::from("/no/such/executable")),
        other => panic!("expected spawn error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_run_spawn_error_for_non_executable() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("plain");
    std::fs::write(&bin, "echo hi\n").unwrap();
    let err = ProcessRunner::new(&bin).run(b"").await.unwrap_err();
    assert!(matches!(err, RunError::Spawn { .. }));
    assert!(err.to_string().starts_with("Failed to spawn "));
}

#[tokio::test]
async fn test_run_times_out() {
    let (_dir, runner) = runner_for("exec sleep 5");
    let runner = runner.with_timeout(Some(Duration::from_millis(200)));

    let started = Instant::now();
    let err = runner.run(b"").await.unwrap_err();
    assert!(matches!(err, RunError::Timeout(d) if d == Duration::from_millis(200)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_run_within_deadline() {
    let (_dir, runner) = runner_for("echo quick");
    let runner = runner.with_timeout(Some(Duration::from_secs(10)));
    let result = runner.run(b"").await.unwrap();
    assert_eq!(result.stdout, b"quick\n");
}

#[test]
fn test_timeout_message() {
    let err = RunError::Timeout(Duration::from_secs(60));
    assert_eq!(err.to_string(), "Timed out after 60s");
}
