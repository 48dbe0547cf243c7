//! Export command implementation.

use crate::cli::ExportArgs;
use crate::commands::build_ignores;
use crate::commands::build_layout;
use crate::error::convert_export_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;
use prozip_core::ExportConfig;
use prozip_core::ProjectExporter;
use std::path::PathBuf;

pub fn execute(args: &ExportArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let (project_dir, layout) = build_layout(&args.project, &args.roots, &args.excludes)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_name(&project_dir),
    };
    if output.exists() && !args.force {
        bail!(
            "output '{}' already exists\n\
             HINT: Use --force to overwrite it.",
            output.display()
        );
    }
    let destination = std::path::absolute(&output)?;

    let ignores = build_ignores(&args.ignores);

    let mut config = ExportConfig::default();
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let progress = (!quiet && CliProgress::should_show()).then(|| CliProgress::new("Exporting"));

    let mut exporter = ProjectExporter::new()
        .project(&layout)
        .destination(&destination)
        .ignore(&ignores)
        .config(config);
    if let Some(progress) = &progress {
        exporter = exporter.progress(progress);
    }

    let result = exporter.export();
    if let Some(progress) = &progress {
        progress.finish();
    }

    match result {
        Ok(report) => formatter.format_export_result(&output, &report),
        Err(err) => Err(convert_export_error(err, &args.project)),
    }
}

/// Default output: `<project-name>.zip` in the current directory.
fn default_output_name(project_dir: &std::path::Path) -> PathBuf {
    let name = project_dir
        .file_name()
        .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().to_string());
    PathBuf::from(format!("{name}.zip"))
}
