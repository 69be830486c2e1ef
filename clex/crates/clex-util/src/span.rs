//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme lives in the scanned buffer: its byte
//! range plus the 1-based line and column of its first byte.
//!
//! # Examples
//!
//! ```
//! use clex_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(&"int x;"[span.range()], "x");
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the first byte (for human-readable output)
///
/// Columns count bytes, not characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the byte range covered by this span.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
