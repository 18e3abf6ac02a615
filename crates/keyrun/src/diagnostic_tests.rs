#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn capture(level: Level, msg: impl std::fmt::Display, color: bool) -> String {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, level, msg, color).unwrap();
    String::from_utf8(buf).unwrap()
}

#[parameterized(
    error = { Level::Error, "Error: test dir not found\n" },
    warning = { Level::Warning, "Warning: test dir not found\n" },
    debug = { Level::Debug, "debug: test dir not found\n" },
)]
fn plain_prefix(level: Level, expected: &str) {
    assert_eq!(capture(level, "test dir not found", false), expected);
}

#[parameterized(
    error = { Level::Error, "\x1b[31mError: x\x1b[0m\n" },
    warning = { Level::Warning, "\x1b[33mWarning: x\x1b[0m\n" },
    debug = { Level::Debug, "\x1b[2mdebug: x\x1b[0m\n" },
)]
fn colored_prefix(level: Level, expected: &str) {
    assert_eq!(capture(level, "x", true), expected);
}

#[test]
fn formats_arguments() {
    let line = capture(
        Level::Debug,
        format_args!("ran {} in {}ms", "add.txt", 4),
        false,
    );
    assert_eq!(line, "debug: ran add.txt in 4ms\n");
}
