//! Export operation reporting.

use std::time::Duration;

/// Report of a project export operation.
///
/// Carries counters, per-path diagnostics (as warnings), and timing.
///
/// # Examples
///
/// ```
/// use prozip_core::ExportReport;
///
/// let mut report = ExportReport::default();
/// report.files_added = 10;
/// report.bytes_written = 2048;
/// report.archive_bytes = 1024;
///
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Number of file entries written to the archive.
    pub files_added: usize,

    /// Number of directory entries written to the archive.
    pub directories_added: usize,

    /// Total bytes of file content written (uncompressed).
    pub bytes_written: u64,

    /// Final size of the archive on disk (0 for dry runs).
    pub archive_bytes: u64,

    /// Broken symbolic links skipped during the walk.
    pub broken_links_skipped: usize,

    /// Per-path diagnostics recorded during the walk.
    pub warnings: Vec<String>,

    /// Duration of the export operation.
    pub duration: Duration,
}

impl ExportReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a per-path diagnostic.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any diagnostics were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of entries written.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }

    /// Space saved by compression, as a percentage of the input bytes.
    ///
    /// Returns 0.0 when nothing was written, when the archive size is
    /// unknown (dry run), or when the archive did not shrink the input.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 || self.archive_bytes == 0 {
            return 0.0;
        }
        let saved = self.bytes_written.saturating_sub(self.archive_bytes);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }
}
