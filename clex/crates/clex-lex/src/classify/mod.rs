//! Lexeme classification.
//!
//! [`classify`] maps a lexeme and its coarse [`Category`] to a
//! [`TokenKind`]. Each category tries a fixed list of predicates in order
//! and the first one that accepts wins:
//!
//! | Category       | Predicates tried                          |
//! |----------------|-------------------------------------------|
//! | `Symbol`       | operator, punctuation                     |
//! | `Quoted`       | string, character                         |
//! | `Word`         | numeric, floating, keyword, identifier    |
//! | `Preprocessor` | directive                                 |
//!
//! When nothing accepts, the result is [`TokenKind::Invalid`].

mod literal;
mod tables;

pub use literal::{
    is_char_literal, is_floating_literal, is_identifier, is_numeric_literal, is_string_literal,
};
pub use tables::{
    is_directive, is_keyword, is_operator, is_punctuation, DIRECTIVES, KEYWORDS, OPERATORS,
    PUNCTUATION,
};

use crate::token::{Category, TokenKind};

/// Classifies `lexeme` within `category`.
///
/// # Example
///
/// ```
/// use clex_lex::classify::classify;
/// use clex_lex::{Category, TokenKind};
///
/// assert_eq!(classify("int", Category::Word), TokenKind::Keyword);
/// assert_eq!(classify("3.14", Category::Word), TokenKind::FloatingPointLiteral);
/// assert_eq!(classify("89a", Category::Word), TokenKind::Invalid);
/// ```
pub fn classify(lexeme: &str, category: Category) -> TokenKind {
    match category {
        Category::Symbol if is_operator(lexeme) => TokenKind::Operator,
        Category::Symbol if is_punctuation(lexeme) => TokenKind::Punctuator,
        Category::Quoted if is_string_literal(lexeme) => TokenKind::StringLiteral,
        Category::Quoted if is_char_literal(lexeme) => TokenKind::CharacterLiteral,
        Category::Word if is_numeric_literal(lexeme) => TokenKind::NumericLiteral,
        Category::Word if is_floating_literal(lexeme) => TokenKind::FloatingPointLiteral,
        Category::Word if is_keyword(lexeme) => TokenKind::Keyword,
        Category::Word if is_identifier(lexeme) => TokenKind::Identifier,
        Category::Preprocessor if is_directive(lexeme) => TokenKind::PreprocessorOperator,
        _ => TokenKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_dispatch() {
        assert_eq!(classify("+=", Category::Symbol), TokenKind::Operator);
        assert_eq!(classify(".", Category::Symbol), TokenKind::Operator);
        assert_eq!(classify("/", Category::Symbol), TokenKind::Operator);
        assert_eq!(classify("@", Category::Symbol), TokenKind::Punctuator);
        assert_eq!(classify("$", Category::Symbol), TokenKind::Punctuator);
        assert_eq!(classify("+-", Category::Symbol), TokenKind::Invalid);
        assert_eq!(classify("...", Category::Symbol), TokenKind::Invalid);
    }

    #[test]
    fn test_quoted_dispatch() {
        assert_eq!(classify("\"hello\"", Category::Quoted), TokenKind::StringLiteral);
        assert_eq!(classify("'a'", Category::Quoted), TokenKind::CharacterLiteral);
        assert_eq!(classify("'\\n'", Category::Quoted), TokenKind::CharacterLiteral);
        assert_eq!(classify("'a", Category::Quoted), TokenKind::Invalid);
        assert_eq!(classify("\"hello", Category::Quoted), TokenKind::Invalid);
    }

    #[test]
    fn test_word_dispatch_order() {
        assert_eq!(classify("42", Category::Word), TokenKind::NumericLiteral);
        assert_eq!(classify("3.14", Category::Word), TokenKind::FloatingPointLiteral);
        assert_eq!(classify("if", Category::Word), TokenKind::Keyword);
        assert_eq!(classify("ifs", Category::Word), TokenKind::Identifier);
        assert_eq!(classify("intx", Category::Word), TokenKind::Identifier);
        assert_eq!(classify("abc", Category::Word), TokenKind::Identifier);
        assert_eq!(classify("s1.name", Category::Word), TokenKind::Identifier);
        assert_eq!(classify("89a", Category::Word), TokenKind::Invalid);
    }

    #[test]
    fn test_preprocessor_dispatch() {
        assert_eq!(classify("#include", Category::Preprocessor), TokenKind::PreprocessorOperator);
        assert_eq!(classify("#define", Category::Preprocessor), TokenKind::PreprocessorOperator);
        assert_eq!(classify("#include<stdio.h>", Category::Preprocessor), TokenKind::Invalid);
        assert_eq!(classify("#", Category::Preprocessor), TokenKind::Invalid);
    }

    #[test]
    fn test_category_narrows_predicates() {
        // `sizeof` is an operator spelling, but words never try operators
        assert_eq!(classify("sizeof", Category::Word), TokenKind::Identifier);
        assert_eq!(classify("int", Category::Symbol), TokenKind::Invalid);
        assert_eq!(classify("42", Category::Quoted), TokenKind::Invalid);
    }
}
