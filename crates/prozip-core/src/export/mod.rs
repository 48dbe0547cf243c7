//! Export pipeline: ancestor resolution, path filtering, tree walk,
//! and archive encoding.

pub mod ancestor;
pub mod builder;
pub mod config;
pub mod encoder;
pub mod exporter;
pub mod filter;
pub mod report;

// Re-exports for public API
pub use ancestor::resolve_common_ancestor;
pub use builder::ArchiveBuilder;
pub use config::ExportConfig;
pub use encoder::ArchiveEncoder;
pub use encoder::ArchiveEntry;
pub use encoder::ManifestEncoder;
pub use encoder::ZipEncoder;
pub use exporter::ProjectExporter;
pub use filter::PathFilter;
pub use report::ExportReport;
