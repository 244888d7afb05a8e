//! Shared line cursor and the system-announcement sub-scanner

use std::iter::Peekable;
use std::str::Split;

/// Forward-only cursor over the physical lines of a transcript
///
/// The main loop and sub-scanners advance the same cursor, so a line consumed
/// by a sub-scanner is never seen by the main classifier.
pub struct LineCursor<'a> {
    lines: Peekable<Split<'a, char>>,
    consumed: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').peekable(),
            consumed: 0,
        }
    }

    /// Number of physical lines consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Advance only while `accept` holds for the upcoming raw line
    pub fn next_if(&mut self, accept: impl FnOnce(&&'a str) -> bool) -> Option<&'a str> {
        let line = self.lines.next_if(accept)?;
        self.consumed += 1;
        Some(line)
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.consumed += 1;
        Some(line)
    }
}

/// Collect the body of a system announcement
///
/// Consumes lines up to, not including, the first blank line or line holding
/// a `[`. Collected lines are trimmed and joined with single spaces.
///
/// The terminating line stays on the cursor. It is usually the next action
/// header, and skipping it would drop that action.
pub fn collect_announcement(cursor: &mut LineCursor<'_>) -> String {
    let mut parts = Vec::new();
    while let Some(line) = cursor.next_if(|l| !l.trim().is_empty() && !l.contains('[')) {
        parts.push(line.trim());
    }
    parts.join(" ")
}
