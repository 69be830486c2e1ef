//! Edge case tests for clex-lex

#[cfg(test)]
mod tests {
    use crate::{scan, scan_bytes, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        scan(source).unwrap().into_tokens()
    }

    fn kind_of(source: &str) -> TokenKind {
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 1, "{source:?} should be one token");
        tokens[0].kind()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].value(), "x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].value(), name);
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        assert_eq!(kind_of("while"), TokenKind::Keyword);
        assert_eq!(kind_of("While"), TokenKind::Identifier);
        assert_eq!(kind_of("WHILE"), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(kind_of("intx"), TokenKind::Identifier);
        assert_eq!(kind_of("_int"), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_sizeof_is_a_word() {
        assert_eq!(kind_of("sizeof"), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_numbers() {
        assert_eq!(kind_of("0"), TokenKind::NumericLiteral);
        assert_eq!(kind_of("007"), TokenKind::NumericLiteral);
        assert_eq!(kind_of("99999999999999999999999"), TokenKind::NumericLiteral);
        assert_eq!(kind_of("1e10"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("1."), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("0x1F"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("0x1.8p3"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("10L"), TokenKind::Invalid);
        assert_eq!(kind_of("1.2.3"), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_float_spellings_win_over_identifiers() {
        assert_eq!(kind_of("inf"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("NaN"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("INFINITY"), TokenKind::FloatingPointLiteral);
        assert_eq!(kind_of("info"), TokenKind::Identifier);
        assert_eq!(kind_of("nanny"), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_signed_number_splits() {
        let t = lex_all("-5");
        assert_eq!(t[0].kind(), TokenKind::Operator);
        assert_eq!(t[1].kind(), TokenKind::NumericLiteral);
    }

    #[test]
    fn test_edge_exponent_with_sign_splits() {
        let t: Vec<_> = lex_all("1e-5").iter().map(|t| t.value().to_string()).collect();
        assert_eq!(t, ["1e", "-", "5"]);
    }

    #[test]
    fn test_edge_dot_leading_float_splits() {
        let t = lex_all(".5");
        assert_eq!(t[0].value(), ".");
        assert_eq!(t[0].kind(), TokenKind::Operator);
        assert_eq!(t[1].kind(), TokenKind::NumericLiteral);
    }

    #[test]
    fn test_edge_ellipsis_is_invalid() {
        assert_eq!(kind_of("..."), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(kind_of("\"\""), TokenKind::StringLiteral);
    }

    #[test]
    fn test_edge_escaped_backslash_before_quote() {
        // `\\"` is read as an escaped quote, so the string runs on
        let t = lex_all(r#""a\\" b"#);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_char_literals() {
        assert_eq!(kind_of("'a'"), TokenKind::CharacterLiteral);
        assert_eq!(kind_of("'\\0'"), TokenKind::CharacterLiteral);
        assert_eq!(kind_of("'\\''"), TokenKind::CharacterLiteral);
        assert_eq!(kind_of("' '"), TokenKind::CharacterLiteral);
    }

    #[test]
    fn test_edge_empty_char_literal() {
        let t = lex_all("''");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].value(), "''");
        assert_eq!(t[0].kind(), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_separators_always_punctuators() {
        for source in ["(", ")", "[", "]", "{", "}", ";", ",", "?", ":"] {
            assert_eq!(kind_of(source), TokenKind::Punctuator, "{source:?}");
        }
    }

    #[test]
    fn test_edge_punctuation_runs() {
        assert_eq!(kind_of("@"), TokenKind::Punctuator);
        assert_eq!(kind_of("`"), TokenKind::Punctuator);
        assert_eq!(kind_of("@@"), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_lone_hash() {
        assert_eq!(kind_of("#"), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_directive_at_end_of_input() {
        assert_eq!(kind_of("#endif"), TokenKind::PreprocessorOperator);
    }

    #[test]
    fn test_edge_unknown_directive() {
        assert_eq!(kind_of("#import"), TokenKind::Invalid);
    }

    #[test]
    fn test_edge_skipped_bytes() {
        let t = lex_all("a \\ b");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].column(), 5);
    }

    #[test]
    fn test_edge_non_ascii_is_skipped() {
        let t = lex_all("x é y");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].value(), "y");
        // `é` is two bytes wide
        assert_eq!(t[1].column(), 6);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a;\r\nb;");
        assert_eq!((t[2].line(), t[2].column()), (2, 1));
    }

    #[test]
    fn test_edge_trailing_newline_adds_nothing() {
        assert_eq!(lex_all("x\n").len(), lex_all("x").len());
    }

    #[test]
    fn test_edge_only_nul() {
        assert!(scan_bytes(b"\0").unwrap().is_empty());
    }

    #[test]
    fn test_edge_unterminated_char_at_eof() {
        let t = lex_all("c = '");
        assert_eq!(t.last().map(Token::value), Some("'"));
        assert_eq!(t.last().map(Token::kind), Some(TokenKind::Invalid));
    }
}
