// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded unified diff between a key and the actual output.

use similar::TextDiff;

/// Unchanged lines shown around each change.
pub const CONTEXT_LINES: usize = 3;

/// Appended when the diff was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// A unified diff split into display lines, capped at a maximum length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedDiff {
    /// Diff lines without their trailing newline
    pub lines: Vec<String>,
    /// More lines existed than were kept
    pub truncated: bool,
}

impl RenderedDiff {
    /// Lines to print, including the truncation marker when present.
    pub fn display_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .chain(self.truncated.then_some(TRUNCATION_MARKER))
    }
}

/// Diff `expected` against `actual` for the fixture `name`.
///
/// Headers read `expected/<name>` and `actual/<name>`. At most `max_lines`
/// lines are kept.
pub fn render(name: &str, expected: &str, actual: &str, max_lines: usize) -> RenderedDiff {
    let diff = TextDiff::from_lines(expected, actual);
    let text = diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&format!("expected/{}", name), &format!("actual/{}", name))
        .to_string();

    let mut all = text.lines();
    let lines: Vec<String> = all.by_ref().take(max_lines).map(str::to_owned).collect();
    let truncated = all.next().is_some();

    RenderedDiff { lines, truncated }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
