//! Source loading.
//!
//! This module provides [`SourceFile`], which holds the complete contents of
//! one input file as raw bytes. The scanner works on bytes, so no UTF-8
//! validation happens here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use clex_util::SourceFile;
///
/// let file = SourceFile::from_bytes("main.c", "int main;".as_bytes());
/// assert_eq!(file.name(), "main.c");
/// assert_eq!(file.content(), b"int main;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Path the file was loaded from (or a display name for in-memory sources)
    path: PathBuf,
    /// Raw file content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Loads the whole file at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(path, content))
    }

    /// Create a source file from bytes already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name as given when the file was created
    pub fn name(&self) -> &str {
        self.path.to_str().unwrap_or("<non-utf8 path>")
    }

    /// File name with its last extension removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::SourceFile;
    ///
    /// let file = SourceFile::from_bytes("src/example_code.c", Vec::new());
    /// assert_eq!(file.stem(), "example_code");
    /// ```
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("out")
    }

    /// Get the raw file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Size of the content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::SourceFile;
    ///
    /// let file = SourceFile::from_bytes("main.c", "a\nb\nc".as_bytes());
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
