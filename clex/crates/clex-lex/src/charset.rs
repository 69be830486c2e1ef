//! Byte classes used by segmentation and classification.
//!
//! Everything here is ASCII-only and works on raw bytes; bytes outside
//! ASCII never belong to any class.

/// Bytes that form operator runs.
pub const OPERATOR_CHARS: &[u8] = b"+-*/%=!<>&|^~";

/// Bytes that form punctuation runs.
pub const PUNCTUATION_RUN_CHARS: &[u8] = b"$./@`";

/// Separator bytes. `#` opens a directive; `<`, `>` and `$` are claimed by
/// the operator and punctuation runs before a separator is considered.
pub const SEPARATOR_CHARS: &[u8] = b"()[]{}<>#$;,?:";

/// Checks for C whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// # Example
///
/// ```
/// use clex_lex::charset::is_space;
///
/// assert!(is_space(b'\x0b'));
/// assert!(!is_space(b'_'));
/// ```
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Checks if a byte can appear in an operator run.
#[inline]
pub fn is_operator_char(b: u8) -> bool {
    OPERATOR_CHARS.contains(&b)
}

/// Checks if a byte can appear in a punctuation run.
#[inline]
pub fn is_punctuation_run_char(b: u8) -> bool {
    PUNCTUATION_RUN_CHARS.contains(&b)
}

/// Checks if a byte is a separator.
///
/// # Example
///
/// ```
/// use clex_lex::charset::is_separator;
///
/// assert!(is_separator(b';'));
/// assert!(is_separator(b'#'));
/// assert!(!is_separator(b'.'));
/// ```
#[inline]
pub fn is_separator(b: u8) -> bool {
    SEPARATOR_CHARS.contains(&b)
}

/// Checks if a byte can start an identifier: ASCII letter or `_`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: ASCII alphanumeric or `_`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte belongs in a word run (identifier, keyword, number).
///
/// Word runs also swallow `.`, so `s.name` and `3.14` stay whole.
#[inline]
pub fn is_word_char(b: u8) -> bool {
    is_ident_continue(b) || b == b'.'
}
