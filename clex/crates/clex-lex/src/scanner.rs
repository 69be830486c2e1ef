//! Two-pass scanner.
//!
//! Pass 1 walks the buffer with a [`Lexer`] and counts segments. Storage for
//! exactly that many tokens is reserved up front, then Pass 2 walks the
//! buffer again with a fresh lexer, classifying each segment into the next
//! slot. Both passes use the same lexer, so they always agree; the count is
//! still checked at the end and a disagreement is a hard error.

use tracing::{debug, error, trace};

use crate::classify::classify;
use crate::error::{ScanError, ScanResult};
use crate::lexer::{Lexer, Segment, SegmentClass};
use crate::token::{Token, TokenKind};
use crate::token_set::{TokenSet, TokenSetBuilder};

/// Scans a buffer into a [`TokenSet`].
///
/// # Example
///
/// ```
/// use clex_lex::{Scanner, TokenKind};
///
/// let scanner = Scanner::new(b"#include <stdio.h>");
/// assert_eq!(scanner.count(), 4);
///
/// let set = scanner.scan().unwrap();
/// assert_eq!(set.tokens()[0].kind(), TokenKind::PreprocessorOperator);
/// assert_eq!(set.tokens()[2].value(), "stdio.h");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    source: &'a [u8],
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`. Input ends at the first NUL byte if
    /// there is one.
    pub fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    /// Pass 1: number of tokens the buffer holds.
    pub fn count(&self) -> usize {
        let count = Lexer::new(self.source).count();
        debug!(count, bytes = self.source.len(), "counted tokens");
        count
    }

    /// Runs both passes and returns the tokens.
    ///
    /// # Errors
    ///
    /// [`ScanError::AllocationFailure`] if token storage or a token value
    /// cannot be allocated, and [`ScanError::CountMismatch`] if the passes
    /// disagree.
    pub fn scan(&self) -> ScanResult<TokenSet> {
        let expected = self.count();
        let mut builder = TokenSetBuilder::with_size(expected)?;

        let lexer = Lexer::new(self.source);
        let source = lexer.source();
        let mut emitted = 0usize;

        for segment in lexer {
            let token = make_token(source, segment)?;
            trace!(
                value = token.value(),
                kind = token.kind().name(),
                line = token.line(),
                column = token.column(),
                "token"
            );
            if emitted < expected {
                builder.populate(emitted, token)?;
            }
            emitted += 1;
        }

        if emitted != expected {
            error!(expected, actual = emitted, "token count mismatch between passes");
            return Err(ScanError::CountMismatch {
                expected,
                actual: emitted,
            });
        }

        debug!(tokens = emitted, "filled token set");
        builder.finish()
    }
}

/// Copies and classifies one segment.
fn make_token(source: &[u8], segment: Segment) -> ScanResult<Token> {
    let text = String::from_utf8_lossy(segment.lexeme(source));

    let mut value = String::new();
    value
        .try_reserve_exact(text.len())
        .map_err(|_| ScanError::AllocationFailure {
            what: "token value",
            requested: text.len(),
        })?;
    value.push_str(&text);

    let kind = match segment.class {
        SegmentClass::Separator => TokenKind::Punctuator,
        SegmentClass::Coarse(category) => classify(&value, category),
    };

    Ok(Token::new(value, kind, segment.span))
}

/// Scans text.
///
/// # Example
///
/// ```
/// use clex_lex::{scan, TokenKind};
///
/// let set = scan("int x;\n  y = 2;").unwrap();
/// let y = &set.tokens()[3];
/// assert_eq!(y.value(), "y");
/// assert_eq!((y.line(), y.column()), (2, 3));
/// ```
pub fn scan(text: &str) -> ScanResult<TokenSet> {
    scan_bytes(text.as_bytes())
}

/// Scans raw bytes. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD in token values.
pub fn scan_bytes(bytes: &[u8]) -> ScanResult<TokenSet> {
    Scanner::new(bytes).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<(String, TokenKind)> {
        scan(source)
            .unwrap()
            .iter()
            .map(|t| (t.value().to_string(), t.kind()))
            .collect()
    }

    fn values(source: &str) -> Vec<String> {
        kinds(source).into_iter().map(|(v, _)| v).collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            kinds("int x = 42;"),
            [
                ("int".to_string(), TokenKind::Keyword),
                ("x".to_string(), TokenKind::Identifier),
                ("=".to_string(), TokenKind::Operator),
                ("42".to_string(), TokenKind::NumericLiteral),
                (";".to_string(), TokenKind::Punctuator),
            ]
        );
    }

    #[test]
    fn test_include_line() {
        assert_eq!(
            kinds("#include <stdio.h>"),
            [
                ("#include".to_string(), TokenKind::PreprocessorOperator),
                ("<".to_string(), TokenKind::Operator),
                ("stdio.h".to_string(), TokenKind::Identifier),
                (">".to_string(), TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn test_literals() {
        let tokens = kinds("x = 3.14; c = 'a'; s = \"hi\";");
        assert_eq!(tokens[2], ("3.14".to_string(), TokenKind::FloatingPointLiteral));
        assert_eq!(tokens[6], ("'a'".to_string(), TokenKind::CharacterLiteral));
        assert_eq!(tokens[10], ("\"hi\"".to_string(), TokenKind::StringLiteral));
    }

    #[test]
    fn test_invalid_lexemes() {
        let tokens = kinds("89a +- '");
        assert!(tokens.iter().all(|(_, kind)| *kind == TokenKind::Invalid));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_positions() {
        let set = scan("int x;\n  y = 2;").unwrap();
        let positions: Vec<_> = set.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, [(1, 1), (1, 5), (1, 6), (2, 3), (2, 5), (2, 7), (2, 8)]);
    }

    #[test]
    fn test_string_keeps_embedded_newline() {
        let set = scan("\"a\nb\" c").unwrap();
        assert_eq!(set.tokens()[0].value(), "\"a\nb\"");
        assert_eq!(set.tokens()[0].kind(), TokenKind::StringLiteral);
        assert_eq!((set.tokens()[1].line(), set.tokens()[1].column()), (2, 4));
    }

    #[test]
    fn test_nul_ends_input() {
        assert_eq!(values("a b\0c d"), ["a", "b"]);
        assert_eq!(Scanner::new(b"\0int").count(), 0);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(scan("").unwrap().is_empty());
        assert!(scan(" \t\r\n\x0b\x0c").unwrap().is_empty());
    }

    #[test]
    fn test_non_utf8_bytes() {
        let set = scan_bytes(b"\"\xff\" x").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.tokens()[0].value(), "\"\u{fffd}\"");
        assert_eq!(set.tokens()[0].kind(), TokenKind::StringLiteral);
        assert_eq!(set.tokens()[1].column(), 5);
    }

    #[test]
    fn test_count_matches_scan() {
        let source = b"for (i = 0; i < n; i++) { sum += a[i]; }";
        let scanner = Scanner::new(source);
        assert_eq!(scanner.count(), scanner.scan().unwrap().len());
    }

    proptest! {
        #[test]
        fn prop_count_equals_len(source in "[ -~\t\n]{0,200}") {
            let scanner = Scanner::new(source.as_bytes());
            let set = scanner.scan().unwrap();
            prop_assert_eq!(scanner.count(), set.len());
        }

        #[test]
        fn prop_scan_is_deterministic(source in "[ -~\t\n]{0,200}") {
            prop_assert_eq!(scan(&source).unwrap(), scan(&source).unwrap());
        }

        #[test]
        fn prop_kind_counts_sum_to_total(source in "[ -~\t\n]{0,200}") {
            let set = scan(&source).unwrap();
            let counts = set.kind_counts();
            prop_assert_eq!(counts.len(), TokenKind::SUMMARY_ORDER.len());
            prop_assert_eq!(counts.values().sum::<usize>(), set.len());
        }

        #[test]
        fn prop_positions_are_ordered(source in "[ -~\t\n]{0,200}") {
            let set = scan(&source).unwrap();
            for pair in set.tokens().windows(2) {
                let a = (pair[0].line(), pair[0].column());
                let b = (pair[1].line(), pair[1].column());
                prop_assert!(a < b, "{:?} should come before {:?}", a, b);
            }
        }

        #[test]
        fn prop_values_are_never_empty(source in "[ -~\t\n]{0,200}") {
            let set = scan(&source).unwrap();
            prop_assert!(set.iter().all(|t| !t.value().is_empty()));
        }

        #[test]
        fn prop_text_after_nul_is_ignored(head in "[ -~\n]{0,80}", tail in "[ -~\n]{0,80}") {
            let mut bytes = head.clone().into_bytes();
            bytes.push(0);
            bytes.extend_from_slice(tail.as_bytes());
            prop_assert_eq!(scan_bytes(&bytes).unwrap(), scan(&head).unwrap());
        }
    }
}
