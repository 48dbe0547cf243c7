//! Fluent builder for export operations.

use crate::ExportReport;
use crate::Result;
use crate::api;
use crate::error::ExportError;
use crate::export::config::ExportConfig;
use crate::ignore::IgnoreOracle;
use crate::ignore::IgnorePatterns;
use crate::progress::NotificationSink;
use crate::progress::ProgressReporter;
use crate::project::ProjectModel;
use std::path::Path;
use std::path::PathBuf;

/// Builder for exporting a project tree to a zip archive.
///
/// Collaborator seams (ignore oracle, progress reporter, notification
/// sink) are optional; the stock ignore patterns are used when no oracle
/// is supplied.
///
/// # Examples
///
/// ```no_run
/// use prozip_core::ProjectExporter;
/// use prozip_core::ProjectLayout;
///
/// let layout = ProjectLayout::new("/ws/proj");
/// let report = ProjectExporter::new()
///     .project(&layout)
///     .destination("/tmp/proj.zip")
///     .export()?;
/// println!("wrote {} entries", report.total_entries());
/// # Ok::<(), prozip_core::ExportError>(())
/// ```
#[derive(Default)]
pub struct ProjectExporter<'a> {
    project: Option<&'a dyn ProjectModel>,
    destination: Option<PathBuf>,
    ignore: Option<&'a dyn IgnoreOracle>,
    progress: Option<&'a dyn ProgressReporter>,
    notifications: Option<&'a dyn NotificationSink>,
    config: ExportConfig,
}

impl<'a> ProjectExporter<'a> {
    /// Creates an exporter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project to export.
    #[must_use]
    pub fn project(mut self, project: &'a dyn ProjectModel) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the destination archive path.
    #[must_use]
    pub fn destination<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.destination = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the ignore oracle (defaults to [`IgnorePatterns::default`]).
    #[must_use]
    pub fn ignore(mut self, ignore: &'a dyn IgnoreOracle) -> Self {
        self.ignore = Some(ignore);
        self
    }

    /// Attaches a progress reporter.
    #[must_use]
    pub fn progress(mut self, progress: &'a dyn ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Attaches a notification sink for the terminal outcome.
    #[must_use]
    pub fn notifications(mut self, sink: &'a dyn NotificationSink) -> Self {
        self.notifications = Some(sink);
        self
    }

    /// Sets the full configuration.
    #[must_use]
    pub fn config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the compression level (1-9).
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 1-9.
    #[must_use]
    pub fn compression_level(mut self, level: u8) -> Self {
        self.config = self.config.with_compression_level(level);
        self
    }

    /// Runs the export.
    ///
    /// The notification sink, if attached, is informed of the outcome
    /// exactly once before this method returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the project or destination is unset, the
    /// configuration is invalid, the roots share no common ancestor, or
    /// any I/O or encode failure aborts the walk.
    pub fn export(self) -> Result<ExportReport> {
        let result = self.run();
        if let Some(sink) = self.notifications {
            match &result {
                Ok(_) => {
                    if let Some(destination) = &self.destination {
                        sink.success(destination);
                    }
                }
                Err(err) => sink.failure(&err.to_string()),
            }
        }
        result
    }

    fn run(&self) -> Result<ExportReport> {
        let project = self
            .project
            .ok_or_else(|| ExportError::InvalidConfiguration {
                reason: "project not set".to_string(),
            })?;
        let destination =
            self.destination
                .as_deref()
                .ok_or_else(|| ExportError::InvalidConfiguration {
                    reason: "destination not set".to_string(),
                })?;

        let default_ignore;
        let ignore = match self.ignore {
            Some(ignore) => ignore,
            None => {
                default_ignore = IgnorePatterns::default();
                &default_ignore
            }
        };

        api::export_project(project, destination, ignore, &self.config, self.progress)
    }
}
