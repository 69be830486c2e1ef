//! Core segmentation.
//!
//! This module contains the `Lexer` struct, the `Segment` it produces, and
//! the dispatch that picks a segmentation rule for each position.

use clex_util::Span;
use tracing::trace;

use crate::charset::{
    is_ident_continue, is_operator_char, is_punctuation_run_char, is_separator, is_space,
};
use crate::cursor::Cursor;
use crate::token::Category;

/// How a segment gets its token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentClass {
    /// Single separator byte; always a punctuator.
    Separator,
    /// Classified by the classifier within this category.
    Coarse(Category),
}

/// One lexeme boundary found by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Byte range and starting position.
    pub span: Span,
    /// How to classify the lexeme.
    pub class: SegmentClass,
}

impl Segment {
    /// Returns the lexeme bytes of this segment within `source`.
    pub fn lexeme<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        &source[self.span.range()]
    }
}

/// Splits a byte buffer into segments.
///
/// This is the single definition of the segmentation rules; the scanner
/// runs it once to count and once to fill. Rules are tried in this order
/// at every position:
///
/// 1. whitespace is skipped
/// 2. `"` string
/// 3. `'` character
/// 4. operator run (`+-*/%=!<>&|^~`)
/// 5. punctuation run (`$./@` and backtick)
/// 6. separator (`()[]{};,?:`)
/// 7. `#` directive up to the next whitespace
/// 8. word run (alphanumerics, `_`, `.`)
/// 9. anything else is skipped
///
/// # Example
///
/// ```
/// use clex_lex::lexer::Lexer;
///
/// let segments: Vec<_> = Lexer::new(b"x += 1;").collect();
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[1].span.column, 3);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given buffer.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The buffer the lexer walks, cut at the first NUL byte.
    pub fn source(&self) -> &'a [u8] {
        self.cursor.source()
    }

    /// Returns the next segment, or `None` at end of input.
    pub fn next_segment(&mut self) -> Option<Segment> {
        loop {
            let byte = self.cursor.current_byte()?;

            if is_space(byte) {
                self.cursor.bump();
                continue;
            }

            let start = self.cursor.position();
            let (line, column) = self.cursor.mark();

            let class = match byte {
                b'"' => self.lex_string(),
                b'\'' => self.lex_char(),
                b if is_operator_char(b) => self.lex_operator_run(),
                b if is_punctuation_run_char(b) => self.lex_punctuation_run(),
                b'#' => self.lex_directive(),
                b if is_separator(b) => self.lex_separator(),
                b if is_ident_continue(b) => self.lex_word(),
                b => {
                    trace!(byte = b, line, column, "skipping unrecognized byte");
                    self.cursor.bump();
                    continue;
                }
            };

            let span = Span::new(start, self.cursor.position(), line, column);
            return Some(Segment { span, class });
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_segment()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
