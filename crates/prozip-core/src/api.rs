//! High-level public API for project export.

use crate::ExportError;
use crate::Result;
use crate::export::ExportConfig;
use crate::export::ExportReport;
use crate::export::ancestor::resolve_common_ancestor;
use crate::export::builder::ArchiveBuilder;
use crate::export::encoder::ArchiveEncoder;
use crate::export::encoder::ArchiveEntry;
use crate::export::encoder::ManifestEncoder;
use crate::export::encoder::ZipEncoder;
use crate::export::filter::PathFilter;
use crate::ignore::IgnoreOracle;
use crate::progress::ProgressReporter;
use crate::project::ProjectModel;
use crate::project::collect_roots;
use std::path::Path;
use std::time::Instant;

/// Exports a project tree into a zip archive at `destination`.
///
/// The inclusion set is the project base path plus every module content
/// root; the exclusion set is every module exclude root plus the
/// destination itself, so the archive can never include itself. The walk
/// starts at the nearest common ancestor of the inclusion roots and
/// consults the filter for every visited path.
///
/// The destination handle is scoped: it is acquired after ancestor
/// resolution succeeds (so a `NoCommonAncestor` failure writes no
/// bytes) and released on every exit path; after a failure the partial
/// file is not a valid archive.
///
/// # Errors
///
/// Returns an error if:
/// - the configuration is invalid
/// - a content root does not exist
/// - the content roots share no common ancestor
/// - any I/O or encode failure aborts the walk
/// - the cancellation flag is raised mid-walk
///
/// # Examples
///
/// ```no_run
/// use prozip_core::ExportConfig;
/// use prozip_core::IgnorePatterns;
/// use prozip_core::ProjectLayout;
/// use prozip_core::export_project;
/// use std::path::Path;
///
/// let layout = ProjectLayout::new("/ws/proj");
/// let ignore = IgnorePatterns::default();
/// let config = ExportConfig::default();
/// let report = export_project(&layout, Path::new("/tmp/proj.zip"), &ignore, &config, None)?;
/// println!("added {} files", report.files_added);
/// # Ok::<(), prozip_core::ExportError>(())
/// ```
pub fn export_project(
    project: &dyn ProjectModel,
    destination: &Path,
    ignore: &dyn IgnoreOracle,
    config: &ExportConfig,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ExportReport> {
    config.validate()?;

    let (content_roots, exclude_roots) = collect_roots(project, Some(destination));
    for root in &content_roots {
        if !root.exists() {
            return Err(ExportError::RootNotFound { path: root.clone() });
        }
    }

    let ancestor = resolve_common_ancestor(&content_roots)?;

    let start = Instant::now();
    let mut encoder = ZipEncoder::create(destination, config.compression_level)?;

    let filter = PathFilter::new(&content_roots, &exclude_roots, ignore, progress);
    let cancel_flag = config.cancel_flag.as_deref();
    let builder =
        ArchiveBuilder::new(&ancestor, project.base_path(), filter).with_cancel_flag(cancel_flag);

    let mut report = ExportReport::new();
    builder.build(&mut encoder, &mut report)?;
    encoder.close()?;

    report.archive_bytes = std::fs::metadata(destination)?.len();
    report.duration = start.elapsed();

    Ok(report)
}

/// Computes the entries an export would write, without producing any
/// archive bytes.
///
/// Runs the same root snapshot, ancestor resolution, and filtered walk
/// as [`export_project`], but collects [`ArchiveEntry`] records instead
/// of encoding them. `destination`, when given, is still treated as an
/// implicit exclude root, so the preview matches a subsequent export to
/// that path exactly.
///
/// # Errors
///
/// Same failure modes as [`export_project`], minus archive I/O.
pub fn preview_entries(
    project: &dyn ProjectModel,
    destination: Option<&Path>,
    ignore: &dyn IgnoreOracle,
) -> Result<Vec<ArchiveEntry>> {
    let (content_roots, exclude_roots) = collect_roots(project, destination);
    for root in &content_roots {
        if !root.exists() {
            return Err(ExportError::RootNotFound { path: root.clone() });
        }
    }

    let ancestor = resolve_common_ancestor(&content_roots)?;

    let filter = PathFilter::new(&content_roots, &exclude_roots, ignore, None);
    let builder = ArchiveBuilder::new(&ancestor, project.base_path(), filter);

    let mut encoder = ManifestEncoder::new();
    let mut report = ExportReport::new();
    builder.build(&mut encoder, &mut report)?;
    encoder.close()?;

    Ok(encoder.into_entries())
}
