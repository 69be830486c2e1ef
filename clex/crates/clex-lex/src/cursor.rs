//! Byte cursor for traversing source buffers.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a byte buffer. Line and column are tracked with a
//! pending-advance accumulator: consumed bytes are counted in `pending` and
//! only committed to the column when the next lexeme starts (see
//! [`Cursor::mark`]). A newline commits nothing; it moves to the next line
//! and resets both the column and the accumulator.
//!
//! The buffer ends at its last byte or at the first NUL byte, whichever
//! comes first.

/// A cursor over a byte buffer.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"int x;");
/// assert_eq!(cursor.current_byte(), Some(b'i'));
/// cursor.eat_while(|b| b.is_ascii_alphabetic());
/// cursor.bump();
/// assert_eq!(cursor.mark(), (1, 5));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The buffer being traversed, already cut at the first NUL.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Last committed column number (1-based).
    column: u32,

    /// Bytes consumed on this line since the column was last committed.
    pending: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"ab\0cd");
    /// assert_eq!(cursor.source(), b"ab");
    /// ```
    pub fn new(source: &'a [u8]) -> Self {
        let end = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        Self {
            source: &source[..end],
            position: 0,
            line: 1,
            column: 1,
            pending: 0,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Consumes one byte and returns it.
    ///
    /// Does nothing and returns `None` if already at end.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.current_byte()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
            self.pending = 0;
        } else {
            self.pending += 1;
        }
        Some(b)
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"'\\n'");
    /// assert!(cursor.match_byte(b'\''));
    /// assert!(!cursor.match_byte(b'\''));
    /// assert_eq!(cursor.current_byte(), Some(b'\\'));
    /// ```
    #[inline]
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
    }

    /// Commits the pending advance and returns the position of the next
    /// byte as `(line, column)`.
    #[inline]
    pub fn mark(&mut self) -> (u32, u32) {
        self.column += self.pending;
        self.pending = 0;
        (self.line, self.column)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the last committed column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns the buffer being traversed (without any NUL terminator).
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
