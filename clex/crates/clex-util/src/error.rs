//! Core error types for clex-util crate

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source loading
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
