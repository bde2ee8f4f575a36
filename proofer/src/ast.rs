//! Source location types
//!
//! Formulas are entered one line at a time, so a location is a byte range into
//! that line plus the 1-based character column of its start. Spans always point
//! into the text the user typed, never into the whitespace-stripped copy the
//! parser works on.

use std::fmt;

/// Span representing a location in a single line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub col: usize,
}

impl Span {
    /// Build a span from byte offsets into `source`.
    pub fn new(source: &str, start: usize, end: usize) -> Self {
        let col = source
            .get(..start)
            .map(|prefix| prefix.chars().count() + 1)
            .unwrap_or(1);
        Self { start, end, col }
    }

    /// An empty span just past the last character of `source`.
    pub fn end_of(source: &str) -> Self {
        Self::new(source, source.len(), source.len())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.col)
    }
}
