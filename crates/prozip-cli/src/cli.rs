//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prozip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a project tree to a zip archive
    Export(ExportArgs),
    /// List the entries an export would contain, without writing anything
    Preview(PreviewArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Project directory to export
    #[arg(value_name = "PROJECT_DIR")]
    pub project: PathBuf,

    /// Output archive path (default: <project-name>.zip)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Additional content root to include (can be repeated)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Path whose subtree is excluded from the archive (can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATH")]
    pub excludes: Vec<PathBuf>,

    /// Additional ignored-filename pattern (can be repeated)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignores: Vec<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Overwrite output file if it exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct PreviewArgs {
    /// Project directory to preview
    #[arg(value_name = "PROJECT_DIR")]
    pub project: PathBuf,

    /// Additional content root to include (can be repeated)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Path whose subtree is excluded from the archive (can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATH")]
    pub excludes: Vec<PathBuf>,

    /// Additional ignored-filename pattern (can be repeated)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignores: Vec<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
