//! Operator, punctuation, and separator segments.

use super::core::{Lexer, SegmentClass};
use crate::charset::{is_operator_char, is_punctuation_run_char};
use crate::token::Category;

impl<'a> Lexer<'a> {
    /// Segments a maximal run of operator characters.
    ///
    /// Handles: `+`, `+=`, `->`, `>>=`, and also runs like `=-` that the
    /// classifier will reject.
    pub(super) fn lex_operator_run(&mut self) -> SegmentClass {
        self.cursor.eat_while(is_operator_char);
        SegmentClass::Coarse(Category::Symbol)
    }

    /// Segments a maximal run of `$./@` and backtick.
    pub(super) fn lex_punctuation_run(&mut self) -> SegmentClass {
        self.cursor.eat_while(is_punctuation_run_char);
        SegmentClass::Coarse(Category::Symbol)
    }

    /// Segments one separator byte.
    pub(super) fn lex_separator(&mut self) -> SegmentClass {
        self.cursor.bump();
        SegmentClass::Separator
    }
}
