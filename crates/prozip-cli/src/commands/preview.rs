//! Preview command implementation: dry-run entry listing.

use crate::cli::PreviewArgs;
use crate::commands::build_ignores;
use crate::commands::build_layout;
use crate::error::convert_export_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use prozip_core::preview_entries;

pub fn execute(args: &PreviewArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let (_, layout) = build_layout(&args.project, &args.roots, &args.excludes)?;
    let ignores = build_ignores(&args.ignores);

    match preview_entries(&layout, None, &ignores) {
        Ok(entries) => {
            if entries.is_empty() {
                formatter.format_warning("no entries match the current roots and filters");
            }
            formatter.format_preview(&entries)
        }
        Err(err) => Err(convert_export_error(err, &args.project)),
    }
}
