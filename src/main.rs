//! tagmerge CLI entry point
//!
//! Parses arguments, wires up logging, and maps fatal errors to a non-zero
//! exit code with the full error chain on stderr.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tagmerge::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
