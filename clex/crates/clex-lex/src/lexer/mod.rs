//! Lexer module.
//!
//! This module organizes segmentation into smaller, focused components:
//! - `core` - Lexer struct, Segment, and rule dispatch
//! - `literal` - string and character literal segments
//! - `operator` - operator runs, punctuation runs, separators
//! - `identifier` - word runs and preprocessor directives

mod core;
mod identifier;
mod literal;
mod operator;

pub use core::{Lexer, Segment, SegmentClass};
