//! Per-path inclusion predicate for the export walk.
//!
//! The filter is an ordered boolean pipeline evaluated once per candidate
//! path: ignore check, exclusion check, liveness check, root relevance
//! check, short-circuiting on the first rejection. The order is
//! significant: ignore and exclusion run before liveness so that
//! excluded or ignored broken links are never logged as diagnostics.

use crate::ExportReport;
use crate::ignore::IgnoreOracle;
use crate::progress::ProgressReporter;
use std::path::Path;
use std::path::PathBuf;

/// Returns `true` if `path` is equal to, or a descendant of, any of the
/// given roots.
///
/// # Examples
///
/// ```
/// use prozip_core::export::filter::is_under_any_root;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let roots = vec![PathBuf::from("/ws/proj")];
/// assert!(is_under_any_root(Path::new("/ws/proj/src/main.rs"), &roots));
/// assert!(is_under_any_root(Path::new("/ws/proj"), &roots));
/// assert!(!is_under_any_root(Path::new("/ws/other"), &roots));
/// ```
#[must_use]
pub fn is_under_any_root(path: &Path, roots: &[PathBuf]) -> bool {
    roots.iter().any(|root| path.starts_with(root))
}

/// Returns `true` if `path` is a strict ancestor of any of the given
/// roots.
///
/// Used to let the walk descend through intermediate directories that
/// are not themselves content roots but contain one.
///
/// # Examples
///
/// ```
/// use prozip_core::export::filter::is_ancestor_of_any_root;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let roots = vec![PathBuf::from("/ws/deep/module")];
/// assert!(is_ancestor_of_any_root(Path::new("/ws/deep"), &roots));
/// assert!(!is_ancestor_of_any_root(Path::new("/ws/deep/module"), &roots));
/// ```
#[must_use]
pub fn is_ancestor_of_any_root(path: &Path, roots: &[PathBuf]) -> bool {
    roots
        .iter()
        .any(|root| root.starts_with(path) && root.as_path() != path)
}

/// Returns `true` if `path` is equal to, or a descendant of, any
/// exclusion root.
#[must_use]
pub fn is_excluded(path: &Path, exclude_roots: &[PathBuf]) -> bool {
    is_under_any_root(path, exclude_roots)
}

/// Inclusion predicate over candidate filesystem paths.
///
/// Operates on an immutable snapshot of the root sets captured before
/// the walk starts; the only state it touches is the report handed in
/// per call (broken-link diagnostics) and the optional progress
/// reporter (fire-and-forget, never alters the verdict).
pub struct PathFilter<'a> {
    content_roots: &'a [PathBuf],
    exclude_roots: &'a [PathBuf],
    ignore: &'a dyn IgnoreOracle,
    progress: Option<&'a dyn ProgressReporter>,
}

impl<'a> PathFilter<'a> {
    /// Creates a filter over the given root snapshot and ignore policy.
    #[must_use]
    pub fn new(
        content_roots: &'a [PathBuf],
        exclude_roots: &'a [PathBuf],
        ignore: &'a dyn IgnoreOracle,
        progress: Option<&'a dyn ProgressReporter>,
    ) -> Self {
        Self {
            content_roots,
            exclude_roots,
            ignore,
            progress,
        }
    }

    /// Decides whether `path` belongs in the archive.
    ///
    /// The four checks run in order, short-circuiting on the first
    /// rejection:
    ///
    /// 1. the ignore oracle flags the filename;
    /// 2. the path lies under an exclusion root;
    /// 3. the path does not exist (broken symlink resolved during the
    ///    walk); excluded with a diagnostic on `report`, never fatal;
    /// 4. the path is neither under a content root nor a directory
    ///    that is a strict ancestor of one.
    ///
    /// On inclusion the entry name is reported to the progress reporter,
    /// if one is attached.
    pub fn include(&self, entry_name: &str, path: &Path, report: &mut ExportReport) -> bool {
        if self.is_ignored(path) || is_excluded(path, self.exclude_roots) {
            return false;
        }

        if !path.exists() {
            report.broken_links_skipped += 1;
            report.add_warning(format!("skipping broken symlink: {}", path.display()));
            return false;
        }

        let is_dir = path.is_dir();
        if !is_under_any_root(path, self.content_roots)
            && !(is_dir && is_ancestor_of_any_root(path, self.content_roots))
        {
            return false;
        }

        if let Some(progress) = self.progress {
            progress.report(entry_name);
        }

        true
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.ignore.is_ignored(name))
    }
}
