//! Closed-set lookups: keywords, operators, punctuation, directives.
//!
//! Membership is exact and case-sensitive. The sets are built once from the
//! constant spelling lists and never change.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// The 31 reserved words.
pub const KEYWORDS: [&str; 31] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "static", "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
    "while",
];

/// The 36 operator spellings. `!=` is listed twice, so there are 35
/// distinct operators.
pub const OPERATORS: [&str; 36] = [
    "+", "-", "*", "/", "%", "++", "--", // arithmetic
    "<", ">", "<=", ">=", "==", "!=", // relational
    "&&", "||", "!", // logical
    "&", "|", "^", "~", "<<", ">>", // bitwise
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "!=", "^=", ">>=", "<<=", // assignment
    "->", ".", // member access
    "sizeof",
];

/// Punctuation spellings.
pub const PUNCTUATION: [&str; 18] = [
    "\\", "#", "$", "'", "(", ")", "/", ":", ";", "?", "@", "[", "\"", "]", "_", "`", "{", "}",
];

/// Preprocessor directive spellings.
pub const DIRECTIVES: [&str; 13] = [
    "#include", "#define", "#undef", "#if", "#ifdef", "#ifndef", "#else", "#elif", "#endif",
    "#error", "#warning", "#line", "#pragma",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.into_iter().collect());
static OPERATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| OPERATORS.into_iter().collect());
static PUNCTUATION_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PUNCTUATION.into_iter().collect());
static DIRECTIVE_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| DIRECTIVES.into_iter().collect());

/// Returns true if `lexeme` is a reserved word.
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_keyword;
///
/// assert!(is_keyword("while"));
/// assert!(!is_keyword("While"));
/// assert!(!is_keyword("intx"));
/// ```
pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORD_SET.contains(lexeme)
}

/// Returns true if `lexeme` is an operator spelling.
pub fn is_operator(lexeme: &str) -> bool {
    OPERATOR_SET.contains(lexeme)
}

/// Returns true if `lexeme` is a punctuation spelling.
pub fn is_punctuation(lexeme: &str) -> bool {
    PUNCTUATION_SET.contains(lexeme)
}

/// Returns true if `lexeme` is a preprocessor directive spelling.
pub fn is_directive(lexeme: &str) -> bool {
    DIRECTIVE_SET.contains(lexeme)
}
