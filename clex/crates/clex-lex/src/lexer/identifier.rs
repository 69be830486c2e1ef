//! Word and directive segments.

use super::core::{Lexer, SegmentClass};
use crate::charset::{is_space, is_word_char};
use crate::token::Category;

impl<'a> Lexer<'a> {
    /// Segments an identifier, keyword, or number.
    ///
    /// The run includes `.`, so `s1.name`, `3.14` and `stdio.h` each stay a
    /// single segment.
    pub(super) fn lex_word(&mut self) -> SegmentClass {
        self.cursor.eat_while(is_word_char);
        SegmentClass::Coarse(Category::Word)
    }

    /// Segments a `#` directive up to the next whitespace.
    pub(super) fn lex_directive(&mut self) -> SegmentClass {
        self.cursor.eat_while(|b| !is_space(b));
        SegmentClass::Coarse(Category::Preprocessor)
    }
}
