mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paneling")]
#[command(version, about = "Paneling CLI - resolve, parse and build panel paths", long_about = None)]
struct Cli {
    /// Configuration file (panels, mount path, separator, max depth) [default: paneling.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a route suffix into a panel stack
    Resolve {
        /// Unmatched suffix after the mount path, e.g. "info/extra:9"
        suffix: String,

        /// Current location, to print the absolute panel paths
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Parse a single segment into a panel descriptor
    Parse {
        /// Segment, e.g. "extra:9:tab=notes"
        segment: String,

        /// Separator override (defaults to the configured one)
        #[arg(short, long)]
        separator: Option<char>,
    },

    /// Build a suffix from panels written as name[:id[:key=value...]]
    Build {
        /// Panels, in stack order
        #[arg(required = true)]
        panels: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Resolve { suffix, location } => {
            commands::resolve::execute(config, &suffix, location.as_deref(), cli.json)?;
        }
        Commands::Parse { segment, separator } => {
            commands::parse::execute(config, &segment, separator, cli.json)?;
        }
        Commands::Build { panels } => {
            commands::build::execute(config, &panels, cli.json)?;
        }
    }

    Ok(())
}
