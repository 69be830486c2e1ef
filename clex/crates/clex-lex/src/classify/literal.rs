//! Shape predicates: numbers, quoted literals, identifiers.

use crate::charset::{is_ident_continue, is_ident_start};

/// Strips surrounding whitespace and `"` characters.
fn trim_number(lexeme: &str) -> &str {
    lexeme.trim_matches(|c: char| c == '"' || c.is_ascii_whitespace() || c == '\x0b')
}

/// Returns true if `lexeme` is entirely a base-10 integer.
///
/// Surrounding whitespace and `"` are ignored. An optional sign is
/// accepted; the magnitude is not range-checked.
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_numeric_literal;
///
/// assert!(is_numeric_literal("42"));
/// assert!(!is_numeric_literal("4x2"));
/// assert!(!is_numeric_literal("3.14"));
/// ```
pub fn is_numeric_literal(lexeme: &str) -> bool {
    let trimmed = trim_number(lexeme);
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `lexeme` is entirely a floating-point value as C's
/// `strtold` reads one.
///
/// Accepts decimal point and exponent forms (`3.14`, `1.`, `.5`, `1e10`),
/// hexadecimal forms (`0x1F`, `0x1.8p3`), and `inf`, `infinity` or `nan`
/// in any case. Each may carry a sign.
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_floating_literal;
///
/// assert!(is_floating_literal("2.5e3"));
/// assert!(is_floating_literal("0x1p3"));
/// assert!(is_floating_literal("NaN"));
/// assert!(!is_floating_literal("3.14f"));
/// ```
pub fn is_floating_literal(lexeme: &str) -> bool {
    let trimmed = trim_number(lexeme).as_bytes();
    !trimmed.is_empty() && float_prefix_len(trimmed) == trimmed.len()
}

/// Length of the longest floating-point prefix of `bytes`, or 0.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let rest = &bytes[sign..];

    let body = special_len(rest)
        .or_else(|| hex_len(rest))
        .unwrap_or_else(|| decimal_len(rest));
    if body == 0 {
        0
    } else {
        sign + body
    }
}

/// `infinity`, `inf`, or `nan` with an optional `(chars)` suffix.
fn special_len(bytes: &[u8]) -> Option<usize> {
    if starts_with_ignore_case(bytes, b"infinity") {
        return Some(8);
    }
    if starts_with_ignore_case(bytes, b"inf") {
        return Some(3);
    }
    if !starts_with_ignore_case(bytes, b"nan") {
        return None;
    }

    let tail = &bytes[3..];
    if tail.first() == Some(&b'(') {
        let inner = digits_len(&tail[1..], |b| b.is_ascii_alphanumeric() || b == b'_');
        if tail.get(1 + inner) == Some(&b')') {
            return Some(3 + inner + 2);
        }
    }
    Some(3)
}

/// `0x` mantissa with at least one hex digit, then an optional `p` exponent.
fn hex_len(bytes: &[u8]) -> Option<usize> {
    if !matches!(bytes, [b'0', b'x' | b'X', ..]) {
        return None;
    }
    let mantissa = &bytes[2..];
    let whole = digits_len(mantissa, |b| b.is_ascii_hexdigit());
    let mut len = whole;
    let mut frac = 0;
    if mantissa.get(len) == Some(&b'.') {
        frac = digits_len(&mantissa[len + 1..], |b| b.is_ascii_hexdigit());
        len += 1 + frac;
    }
    if whole + frac == 0 {
        return None;
    }
    len += exponent_len(&mantissa[len..], b'p');
    Some(2 + len)
}

/// Digits with an optional point (at least one digit), then an optional
/// `e` exponent.
fn decimal_len(bytes: &[u8]) -> usize {
    let whole = digits_len(bytes, |b| b.is_ascii_digit());
    let mut len = whole;
    let mut frac = 0;
    if bytes.get(len) == Some(&b'.') {
        frac = digits_len(&bytes[len + 1..], |b| b.is_ascii_digit());
        len += 1 + frac;
    }
    if whole + frac == 0 {
        return 0;
    }
    len + exponent_len(&bytes[len..], b'e')
}

/// `e[+-]digits` (or `p...`); 0 unless at least one digit follows.
fn exponent_len(bytes: &[u8], marker: u8) -> usize {
    match bytes.first() {
        Some(b) if b.eq_ignore_ascii_case(&marker) => {}
        _ => return 0,
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = digits_len(&bytes[1 + sign..], |b| b.is_ascii_digit());
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}

fn digits_len(bytes: &[u8], accept: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| accept(b)).count()
}

/// Returns true for `'x'` or `'\x'`.
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_char_literal;
///
/// assert!(is_char_literal("'a'"));
/// assert!(is_char_literal("'\\n'"));
/// assert!(!is_char_literal("'ab'"));
/// ```
pub fn is_char_literal(lexeme: &str) -> bool {
    match lexeme.as_bytes() {
        [b'\'', _, b'\''] => true,
        [b'\'', b'\\', _, b'\''] => true,
        _ => false,
    }
}

/// Returns true if `lexeme` starts and ends with `"` (and is at least two
/// bytes long). The interior is not inspected.
pub fn is_string_literal(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"'
}

/// Returns true if `lexeme` is an identifier.
///
/// The first byte is a letter or `_`; later bytes are alphanumeric, `_`,
/// or a `.` that is immediately followed by a letter or `_`. So `s.name`
/// is an identifier while `s.`, `s..x` and `s.1` are not.
pub fn is_identifier(lexeme: &str) -> bool {
    let Some((&first, rest)) = lexeme.as_bytes().split_first() else {
        return false;
    };
    if !is_ident_start(first) {
        return false;
    }

    let mut bytes = rest.iter().copied().peekable();
    while let Some(b) = bytes.next() {
        if b == b'.' {
            match bytes.peek() {
                Some(&next) if is_ident_start(next) => {}
                _ => return false,
            }
        } else if !is_ident_continue(b) {
            return false;
        }
    }
    true
}
