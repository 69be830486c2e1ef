//! Token type definitions.
//!
//! A [`Token`] is the scanner's output unit: an owned lexeme, its
//! fine-grained [`TokenKind`], and where it starts in the source.
//! [`Category`] is the coarse bucket the scanner assigns while segmenting;
//! it only narrows which classifier predicates are tried.

use std::fmt;

use clex_util::Span;

/// Coarse lexeme category assigned during segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A `#...` run: `#include`, `#define`, ...
    Preprocessor,
    /// Operator-character or punctuation-character runs: `+=`, `->`, `.`
    Symbol,
    /// String or character literal: `"..."`, `'x'`
    Quoted,
    /// Identifier, keyword, or number: `main`, `int`, `3.14`
    Word,
}

/// Fine-grained token classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// One of the 31 reserved words
    Keyword,
    /// Arithmetic, relational, logical, bitwise, assignment, member access
    Operator,
    /// Separators and punctuation marks
    Punctuator,
    /// Base-10 integer literal
    NumericLiteral,
    /// Decimal floating-point literal
    FloatingPointLiteral,
    /// `'a'` or `'\n'`
    CharacterLiteral,
    /// `"..."`
    StringLiteral,
    /// Identifier, possibly with `.`-separated member segments
    Identifier,
    /// `#include`, `#define`, ...
    PreprocessorOperator,
    /// Classification failed: no predicate accepted the lexeme.
    ///
    /// Rendered as "Invalid Identifier" in reports.
    #[default]
    Invalid,
}

impl TokenKind {
    /// Every kind, in the order the summary report lists their totals.
    pub const SUMMARY_ORDER: [TokenKind; 10] = [
        TokenKind::PreprocessorOperator,
        TokenKind::Identifier,
        TokenKind::Invalid,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Punctuator,
        TokenKind::NumericLiteral,
        TokenKind::FloatingPointLiteral,
        TokenKind::CharacterLiteral,
        TokenKind::StringLiteral,
    ];

    /// Human-readable name used in listings.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::FloatingPointLiteral.name(), "Floating-Point Literal");
    /// assert_eq!(TokenKind::Invalid.name(), "Invalid Identifier");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::NumericLiteral => "Numeric Literal",
            TokenKind::FloatingPointLiteral => "Floating-Point Literal",
            TokenKind::CharacterLiteral => "Character Literal",
            TokenKind::StringLiteral => "String Literal",
            TokenKind::Identifier => "Identifier",
            TokenKind::PreprocessorOperator => "Preprocessor Operator",
            TokenKind::Invalid => "Invalid Identifier",
        }
    }

    /// Plural label used on the `Total <label>: N` summary lines.
    pub const fn summary_label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keywords",
            TokenKind::Operator => "operators",
            TokenKind::Punctuator => "punctuations",
            TokenKind::NumericLiteral => "numeric literals",
            TokenKind::FloatingPointLiteral => "floating-point literals",
            TokenKind::CharacterLiteral => "character literals",
            TokenKind::StringLiteral => "string literals",
            TokenKind::Identifier => "identifiers",
            TokenKind::PreprocessorOperator => "preprocessor operators",
            TokenKind::Invalid => "invalid-identifiers",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned lexeme.
///
/// The value is an owned copy of the source bytes, so a token outlives the
/// buffer it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    value: String,
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(value: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            value: value.into(),
            kind,
            span,
        }
    }

    /// The lexeme text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Line of the first byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Byte range and position in the scanned buffer.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The four report lines describing this token.
    pub fn report_lines(&self) -> [String; 4] {
        [
            format!("Token: {}", self.value),
            format!("Type: {}", self.kind),
            format!("Line: {}", self.line()),
            format!("Column: {}", self.column()),
        ]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.value, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_invalid() {
        assert_eq!(TokenKind::default(), TokenKind::Invalid);
    }

    #[test]
    fn test_summary_order_covers_every_kind() {
        let mut kinds = TokenKind::SUMMARY_ORDER.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 10);
    }

    #[test]
    fn test_report_lines() {
        let token = Token::new("main", TokenKind::Identifier, Span::new(4, 8, 3, 5));
        assert_eq!(
            token.report_lines(),
            [
                "Token: main".to_string(),
                "Type: Identifier".to_string(),
                "Line: 3".to_string(),
                "Column: 5".to_string(),
            ]
        );
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("#include", TokenKind::PreprocessorOperator, Span::new(0, 8, 1, 1));
        assert_eq!(token.to_string(), "Preprocessor Operator `#include` at 1:1");
    }
}
