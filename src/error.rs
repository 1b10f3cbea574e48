//! Error types for pagy
//!
//! Extraction is the only fallible part of the pagination core. Everything
//! else here covers config loading and the command-line front end.

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for pagy
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Extraction Errors
    // ============================================================================
    /// A `page` or `size` value that is present but not an integer
    #[error("Invalid value for '{param}': {value:?} is not an integer ({source})")]
    Parse {
        /// Query parameter the value came from
        param: String,
        /// Raw value as received
        value: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid pagination config
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the config
        message: String,
    },

    /// Config file is not valid YAML for [`PaginationConfig`](crate::PaginationConfig)
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON input to the CLI could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Reading a config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error for a query parameter
    pub fn parse(param: impl Into<String>, value: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse {
            param: param.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input
    ///
    /// Hosts typically answer these with a 400.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

/// Result type alias for pagy
pub type Result<T> = std::result::Result<T, Error>;
