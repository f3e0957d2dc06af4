//! hxd: inspect HTMX directives from the command line

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hx_directives_cli_lib::{HeadersCommand, OutputFormat, SwapCommand};

#[derive(Parser)]
#[command(name = "hxd")]
#[command(version)]
#[command(about = "Inspect HTMX response directives", long_about = None)]
struct Cli {
    /// Log to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an hx-swap expression and print its canonical form
    Swap {
        /// Expression, e.g. "innerHTML transition:true swap:500ms"
        expression: String,
    },
    /// Print the headers produced by a directive config file
    Headers {
        /// Config file (defaults to ./hxd.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print a JSON object instead of `Name: value` lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        hx_directives::observability::init_with_default("debug")?;
    }

    match cli.command {
        Commands::Swap { expression } => {
            SwapCommand::new(expression).execute()?;
        }
        Commands::Headers { config, json } => {
            let format = if json { OutputFormat::Json } else { OutputFormat::Text };
            HeadersCommand::new(config, format).execute()?;
        }
    }

    Ok(())
}
