//! Error conversion utilities for CLI.
//!
//! Converts prozip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use prozip_core::ExportError;
use std::path::Path;

/// Converts `ExportError` to a user-friendly anyhow error with context
pub fn convert_export_error(err: ExportError, project: &Path) -> anyhow::Error {
    match err {
        ExportError::NoCommonAncestor { first, second } => {
            anyhow!(
                "Content roots for '{}' share no common ancestor ('{}' vs '{}')\n\
                 HINT: All --root directories must live under one filesystem tree.",
                project.display(),
                first.display(),
                second.display()
            )
        }
        ExportError::RootNotFound { path } => {
            anyhow!(
                "Content root does not exist: {}\n\
                 HINT: Check the project directory and any --root flags.",
                path.display()
            )
        }
        ExportError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level {level}\n\
                 HINT: Use a value between 1 (fastest) and 9 (best compression)."
            )
        }
        ExportError::Cancelled => {
            anyhow!(
                "Export of '{}' was cancelled; the partial archive is not valid.",
                project.display()
            )
        }
        ExportError::Io(io_err) => {
            anyhow!(
                "I/O error while exporting '{}': {}",
                project.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error exporting project '{}'", project.display())),
    }
}
