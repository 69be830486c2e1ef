//! clex-util - Foundation types shared by the clex crates.
//!
//! - [`span`] - byte ranges with line/column positions
//! - [`source`] - whole-file source loading
//! - [`error`] - error types for the above

#![warn(missing_docs)]

pub mod error;
pub mod source;
pub mod span;

pub use error::{SourceError, SourceResult};
pub use source::SourceFile;
pub use span::Span;
