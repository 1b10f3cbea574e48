//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagy command-line interface
#[derive(Parser, Debug)]
#[command(name = "pagy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination config file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract pagination from a query string
    Parse {
        /// Query string, e.g. "page=2&size=20&orderBy=name&orderDir=desc"
        query: String,
    },

    /// Build a paginated response envelope
    Respond {
        /// Query string the page was requested with
        query: String,

        /// Total number of matching rows
        #[arg(long, allow_negative_numbers = true)]
        count: i64,

        /// Rows on this page as a JSON array
        #[arg(long)]
        values: Option<String>,
    },

    /// Start a demo HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Number of generated items served by /items
        #[arg(long, default_value = "100")]
        items: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
