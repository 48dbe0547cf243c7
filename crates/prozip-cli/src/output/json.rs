//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use prozip_core::ArchiveEntry;
use prozip_core::ExportReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_export_result(&self, output_path: &Path, report: &ExportReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExportOutput {
            output_path: String,
            files_added: usize,
            directories_added: usize,
            bytes_written: u64,
            archive_bytes: u64,
            compression_percentage: f64,
            broken_links_skipped: usize,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = ExportOutput {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            bytes_written: report.bytes_written,
            archive_bytes: report.archive_bytes,
            compression_percentage: report.compression_percentage(),
            broken_links_skipped: report.broken_links_skipped,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("export", data);
        Self::output(&output)
    }

    fn format_preview(&self, entries: &[ArchiveEntry]) -> Result<()> {
        #[derive(Serialize)]
        struct PreviewEntry {
            name: String,
            source: String,
            is_dir: bool,
        }

        #[derive(Serialize)]
        struct PreviewOutput {
            entries: Vec<PreviewEntry>,
            total: usize,
        }

        let data = PreviewOutput {
            entries: entries
                .iter()
                .map(|e| PreviewEntry {
                    name: e.name.clone(),
                    source: e.source.display().to_string(),
                    is_dir: e.is_dir,
                })
                .collect(),
            total: entries.len(),
        };

        let output = JsonOutput::success("preview", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
