//! clex-lex - Lexical scanner for C-family source text
//!
//! This crate turns a source buffer into a flat, positioned sequence of
//! classified tokens and renders token reports.
//!
//! # Overview
//!
//! Scanning runs in two passes over the same buffer. The first pass counts
//! lexemes, storage for exactly that many tokens is reserved, and the
//! second pass classifies each lexeme into its slot. Both passes are driven
//! by one [`Lexer`], so segmentation rules live in a single place.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{scan, TokenKind};
//!
//! let set = scan("int main() { return 0; }").unwrap();
//! assert_eq!(set.len(), 9);
//!
//! let first = &set.tokens()[0];
//! assert_eq!(first.value(), "int");
//! assert_eq!(first.kind(), TokenKind::Keyword);
//! assert_eq!((first.line(), first.column()), (1, 1));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Segmentation rules
//! - [`classify`] - Lexeme classification
//! - [`scanner`] - The two-pass scan
//! - [`token_set`] - Token collection and report rendering
//! - [`cursor`] - Byte cursor with line/column tracking
//! - [`charset`] - Byte classes
//!
//! # Token Kinds
//!
//! | Kind                    | Examples                        |
//! |-------------------------|---------------------------------|
//! | Keyword                 | `int`, `while`, `return`        |
//! | Operator                | `+`, `+=`, `->`, `>>=`, `.`     |
//! | Punctuator              | `(`, `;`, `@`, `$`              |
//! | Numeric Literal         | `42`, `007`                     |
//! | Floating-Point Literal  | `3.14`, `1e10`                  |
//! | Character Literal       | `'a'`, `'\n'`                   |
//! | String Literal          | `"hello"`                       |
//! | Identifier              | `main`, `s1.name`, `stdio.h`    |
//! | Preprocessor Operator   | `#include`, `#define`           |
//! | Invalid Identifier      | `89a`, `+-`, `#include<a.h>`    |
//!
//! Comments are not recognized; `//` and `/*` come out as operator runs.

#![warn(missing_docs)]

pub mod charset;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod token;
pub mod token_set;

#[cfg(test)]
mod edge_cases;

pub use error::{RenderError, ScanError, ScanResult};
pub use lexer::{Lexer, Segment, SegmentClass};
pub use scanner::{scan, scan_bytes, Scanner};
pub use token::{Category, Token, TokenKind};
pub use token_set::{ReportSink, TokenSet, TokenSetBuilder};
