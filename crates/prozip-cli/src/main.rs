//! Prozip CLI - Command-line utility for exporting project trees to zip
//! archives.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Export(args) => commands::export::execute(args, &*formatter, cli.quiet),
        cli::Commands::Preview(args) => commands::preview::execute(args, &*formatter),
        cli::Commands::Completions(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
