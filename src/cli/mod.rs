//! Command-line interface for tagmerge.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic. The root parser carries the global verbosity
//! flags and dispatches to the selected command.
//!
//! # Example
//!
//! ```bash
//! # Resolve a template with two variables
//! tagmerge render page.html --var personName=Joe --var title=Home
//!
//! # Resolve includes relative to a directory, in German
//! tagmerge render page.html --base-dir templates/ --i18n strings.json --lang de
//! ```

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Root CLI parser.
#[derive(Parser)]
#[command(name = "tagmerge", version, about = "Resolve merge tags in text templates")]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a template file and print the result
    Render(render::RenderCommand),
}

impl Cli {
    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise the default directive follows the
    /// verbosity flags. Logs go to stderr so stdout carries only the
    /// resolved output.
    pub fn init_logging(&self) {
        let default_directive = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Execute the selected command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Render(cmd) => cmd.execute().await,
        }
    }
}
