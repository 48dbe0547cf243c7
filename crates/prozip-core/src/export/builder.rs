//! Filtered tree walk producing archive entries.
//!
//! The builder walks from the resolved common ancestor, consults the
//! [`PathFilter`] for every visited path, and emits surviving entries
//! through an [`ArchiveEncoder`] with stable relative names.

use crate::ExportError;
use crate::ExportReport;
use crate::Result;
use crate::export::encoder::ArchiveEncoder;
use crate::export::filter::PathFilter;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Walks the tree rooted at the common ancestor and writes surviving
/// entries into an archive.
///
/// Naming rule: entries are named relative to the common ancestor,
/// prefixed with the ancestor's own folder name iff the ancestor equals
/// the project base path. When the ancestor sits above the real project
/// it has no semantic name worth preserving, so children land at the
/// archive root under their own names.
pub struct ArchiveBuilder<'a> {
    ancestor: &'a Path,
    base_path: &'a Path,
    filter: PathFilter<'a>,
    cancel_flag: Option<&'a AtomicBool>,
}

impl<'a> ArchiveBuilder<'a> {
    /// Creates a builder for one export operation.
    #[must_use]
    pub fn new(ancestor: &'a Path, base_path: &'a Path, filter: PathFilter<'a>) -> Self {
        Self {
            ancestor,
            base_path,
            filter,
            cancel_flag: None,
        }
    }

    /// Attaches a cooperative cancellation flag, checked before each
    /// directory recursion.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Option<&'a AtomicBool>) -> Self {
        self.cancel_flag = flag;
        self
    }

    /// Runs the walk, writing accepted entries into `encoder`.
    ///
    /// The walk enumerates the ancestor's direct children and descends
    /// recursively; the filter is consulted for every visited path, not
    /// only at the top level. Entry order is the directory listing
    /// order, deterministic per run.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Io`] / [`ExportError::Encode`] on any read or
    ///   encode failure; the walk aborts and the partially written
    ///   archive must be treated as invalid.
    /// - [`ExportError::Cancelled`] when the cancellation flag is raised.
    pub fn build(&self, encoder: &mut dyn ArchiveEncoder, report: &mut ExportReport) -> Result<()> {
        for entry in fs::read_dir(self.ancestor)? {
            self.add_path(&entry?.path(), encoder, report)?;
        }
        Ok(())
    }

    fn add_path(
        &self,
        path: &Path,
        encoder: &mut dyn ArchiveEncoder,
        report: &mut ExportReport,
    ) -> Result<()> {
        let name = self.entry_name(path)?;
        if !self.filter.include(&name, path, report) {
            return Ok(());
        }

        if path.is_dir() {
            self.check_cancelled()?;
            encoder.add_directory(&name, path)?;
            report.directories_added += 1;
            for entry in fs::read_dir(path)? {
                self.add_path(&entry?.path(), encoder, report)?;
            }
        } else {
            let bytes = encoder.add_file(&name, path)?;
            report.files_added += 1;
            report.bytes_written += bytes;
        }

        Ok(())
    }

    /// Derives the archive-relative name for a walked path.
    fn entry_name(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(self.ancestor).map_err(|_| {
            ExportError::Encode(format!(
                "walked path {} is not under the common ancestor {}",
                path.display(),
                self.ancestor.display()
            ))
        })?;
        let name = slash_name(relative)?;

        if self.ancestor == self.base_path
            && let Some(root_name) = self.ancestor.file_name()
        {
            let root_name = root_name.to_str().ok_or_else(|| non_utf8(self.ancestor))?;
            return Ok(format!("{root_name}/{name}"));
        }

        Ok(name)
    }

    fn check_cancelled(&self) -> Result<()> {
        if let Some(flag) = self.cancel_flag
            && flag.load(Ordering::Relaxed)
        {
            return Err(ExportError::Cancelled);
        }
        Ok(())
    }
}

/// Renders a relative path with forward-slash separators.
///
/// Zip entry names use `/` regardless of host path conventions.
fn slash_name(path: &Path) -> Result<String> {
    let raw = path.to_str().ok_or_else(|| non_utf8(path))?;

    #[cfg(windows)]
    let name = raw.replace('\\', "/");

    #[cfg(not(windows))]
    let name = raw.to_string();

    Ok(name)
}

fn non_utf8(path: &Path) -> ExportError {
    ExportError::Encode(format!("path is not valid UTF-8: {}", path.display()))
}
