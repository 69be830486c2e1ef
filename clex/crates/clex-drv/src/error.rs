//! Error handling module for the clex driver.
//!
//! This module provides the driver's error type using `thiserror`, wrapping
//! the library errors so they can be propagated with `?`.

use clex_lex::{RenderError, ScanError};
use clex_util::SourceError;
use thiserror::Error;

/// Main error type for the clex driver.
#[derive(Error, Debug)]
pub enum ClexError {
    /// Error when configuration is missing, unreadable, or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the input file cannot be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Error when scanning fails.
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Error when the report could not be written in full.
    #[error("Report failed: {0}")]
    Render(#[from] RenderError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClexError.
pub type Result<T> = std::result::Result<T, ClexError>;
