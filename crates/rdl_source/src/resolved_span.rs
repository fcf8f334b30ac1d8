//! Spans resolved to `path:line:col` for display.

use std::fmt;
use std::path::PathBuf;

/// A [`Span`](crate::Span) resolved to 1-based line/column coordinates.
///
/// Produced by [`SourceDb::resolve_span`](crate::SourceDb::resolve_span).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the source file.
    pub file_path: PathBuf,
    /// First line (1-based).
    pub start_line: u32,
    /// First column (1-based, in characters).
    pub start_col: u32,
    /// Last line (1-based).
    pub end_line: u32,
    /// Last column (1-based, in characters).
    pub end_col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}
