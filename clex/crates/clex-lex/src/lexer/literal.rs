//! String and character literal segments.
//!
//! Escapes are only looked at as far as needed to find the end of the
//! literal; nothing is decoded.

use super::core::{Lexer, SegmentClass};
use crate::token::Category;

impl<'a> Lexer<'a> {
    /// Segments a string literal.
    ///
    /// Runs through the next `"` that is not directly preceded by `\`, or
    /// to end of input if there is none.
    pub(super) fn lex_string(&mut self) -> SegmentClass {
        self.cursor.bump();

        let mut after_backslash = false;
        while let Some(b) = self.cursor.bump() {
            if b == b'"' && !after_backslash {
                break;
            }
            after_backslash = b == b'\\';
        }

        SegmentClass::Coarse(Category::Quoted)
    }

    /// Segments a character literal: `'`, an optional `\`, one byte, and an
    /// optional closing `'`.
    pub(super) fn lex_char(&mut self) -> SegmentClass {
        self.cursor.bump();
        self.cursor.match_byte(b'\\');
        self.cursor.bump();
        self.cursor.match_byte(b'\'');

        SegmentClass::Coarse(Category::Quoted)
    }
}
