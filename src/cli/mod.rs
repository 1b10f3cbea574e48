//! CLI module
//!
//! Command-line interface for trying out extraction and response building.
//!
//! # Commands
//!
//! - `parse` - Extract pagination from a query string
//! - `respond` - Build a paginated response envelope
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{QuerySummary, Runner};
pub use server::{router, serve, ServerConfig};
