//! Document error types.

use thiserror::Error;

/// Errors that can occur while editing a document.
///
/// Arithmetic never fails; only references to missing lines do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The line index does not exist.
    #[error("Line {index} does not exist (document has {len} lines)")]
    LineOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of lines in the document.
        len: usize,
    },
}

impl DocumentError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LineOutOfRange { .. } => "LINE_OUT_OF_RANGE",
        }
    }
}
