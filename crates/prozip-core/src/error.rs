//! Error types for project export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting a project tree to an archive.
///
/// Per-path conditions (broken symlinks, ignored files, filtered-out
/// paths) are resolved locally during the walk and reported as warnings
/// on the [`ExportReport`](crate::ExportReport); only whole-operation
/// failures appear here.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O operation failed during the walk or while writing the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content roots share no common ancestor directory.
    ///
    /// Raised before any archive I/O begins; there is no partial result.
    #[error("no common ancestor for content roots {first} and {second}")]
    NoCommonAncestor {
        /// Running ancestor at the point the reduction failed.
        first: PathBuf,
        /// The root that shares no ancestor with it.
        second: PathBuf,
    },

    /// A configured content root does not exist on disk.
    #[error("content root not found: {path}")]
    RootNotFound {
        /// The missing root.
        path: PathBuf,
    },

    /// The export configuration is incomplete or inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the problem.
        reason: String,
    },

    /// Compression level outside the supported 1-9 range.
    #[error("invalid compression level: {level} (must be 1-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// The archive encoder rejected an entry or failed to finalize.
    #[error("archive encoding failed: {0}")]
    Encode(String),

    /// The export was cancelled via the cooperative cancellation flag.
    ///
    /// The partially written archive must be treated as invalid.
    #[error("export cancelled")]
    Cancelled,
}

impl ExportError {
    /// Returns `true` if this error is a cooperative cancellation rather
    /// than a genuine failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use prozip_core::ExportError;
    ///
    /// assert!(ExportError::Cancelled.is_cancelled());
    /// assert!(!ExportError::Encode("oops".into()).is_cancelled());
    /// ```
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
