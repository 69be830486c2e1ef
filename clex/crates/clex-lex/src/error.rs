//! Error types for scanning and report rendering.

use thiserror::Error;

/// Error type for scanning
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// Token storage could not be reserved
    #[error("Failed to allocate {what}: {requested} slots requested")]
    AllocationFailure {
        /// What was being allocated
        what: &'static str,
        /// Number of elements requested
        requested: usize,
    },

    /// The fill pass disagreed with the counting pass
    #[error("Token count mismatch: counted {expected}, produced {actual}")]
    CountMismatch {
        /// Tokens found by the counting pass
        expected: usize,
        /// Tokens produced by the fill pass
        actual: usize,
    },
}

/// Error type for writing a summary report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No sink to write to
    #[error("Report sink is unavailable")]
    SinkUnavailable,

    /// Some lines could not be written
    #[error("Report incomplete: {failed} of {attempted} lines failed to write")]
    Incomplete {
        /// Lines whose write failed
        failed: usize,
        /// Lines attempted
        attempted: usize,
    },
}

/// Result type alias for scanning
pub type ScanResult<T> = std::result::Result<T, ScanError>;
