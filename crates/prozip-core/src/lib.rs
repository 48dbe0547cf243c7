//! Project-tree-to-zip export with root-aware path filtering.
//!
//! `prozip-core` packages a directory tree representing a software
//! project into a single zip archive, deriving which paths belong in
//! the archive, and under what relative name, from a set of inclusion
//! roots, a set of exclusion roots, and an external ignore policy.
//! Broken symbolic links are skipped with a diagnostic; the archive
//! destination is always excluded from itself.
//!
//! # Examples
//!
//! ```no_run
//! use prozip_core::ProjectExporter;
//! use prozip_core::ProjectLayout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = ProjectLayout::new("/ws/proj");
//! let report = ProjectExporter::new()
//!     .project(&layout)
//!     .destination("/tmp/proj.zip")
//!     .export()?;
//! println!("wrote {} entries", report.total_entries());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod export;
pub mod ignore;
pub mod progress;
pub mod project;

// Re-export main API types
pub use api::export_project;
pub use api::preview_entries;
pub use error::ExportError;
pub use error::Result;
pub use export::ArchiveEncoder;
pub use export::ArchiveEntry;
pub use export::ExportConfig;
pub use export::ExportReport;
pub use export::ManifestEncoder;
pub use export::ProjectExporter;
pub use export::ZipEncoder;

// Re-export collaborator seams for easier access
pub use ignore::IgnoreOracle;
pub use ignore::IgnorePatterns;
pub use progress::NotificationSink;
pub use progress::ProgressReporter;
pub use project::ModuleRoots;
pub use project::ProjectLayout;
pub use project::ProjectModel;
