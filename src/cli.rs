use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tallyfin")]
#[command(
    author,
    version,
    about = "Cross-referenced metadata reports for media servers"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a report against a server instance
    Run {
        /// Report kind to generate (list them with `tallyfin kinds`)
        #[arg(required = true)]
        kind: String,

        /// Server base URL (overrides config)
        #[arg(long)]
        url: Option<String>,

        /// API token (overrides config)
        #[arg(long)]
        api_key: Option<String>,

        /// Admin user id (discovered via the Users endpoint if omitted)
        #[arg(long)]
        user: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available report kinds
    Kinds,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
