//! Host-facing observation seams: progress text and outcome notification.
//!
//! Both traits are fire-and-forget: implementations must not block and
//! nothing they do can alter the export's control flow.

use std::path::Path;

/// Receives a short progress line per accepted archive entry.
///
/// Implementations are expected to be cheap; the reporter is invoked
/// once per included path during the walk.
pub trait ProgressReporter: Send {
    /// Reports the relative name of the entry currently being processed.
    fn report(&self, text: &str);
}

/// Informed of the terminal outcome of an export, for user display.
///
/// Purely observational: the core never consumes a return value from the
/// sink, and dispatch happens exactly once per export.
pub trait NotificationSink: Send {
    /// The export finished and the archive exists at `archive_path`.
    fn success(&self, archive_path: &Path);

    /// The export failed with a human-readable description.
    fn failure(&self, description: &str);
}
