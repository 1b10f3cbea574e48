//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::load_config;
use crate::error::Result;
use crate::query::{Extractor, PaginationQuery, RawQuery};
use crate::response::{default_pagination_response, paginated_response};
use serde::Serialize;
use serde_json::Value;

/// Everything a host derives from a `PaginationQuery`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    /// Page number
    pub page: i64,
    /// Page size
    pub size: i64,
    /// Row offset of the page
    pub offset: i64,
    /// Rows to fetch
    pub limit: i64,
    /// Combined order clause
    pub order_by: String,
    /// Example query string
    pub query_string: String,
}

impl From<&PaginationQuery> for QuerySummary {
    fn from(query: &PaginationQuery) -> Self {
        Self {
            page: query.page(),
            size: query.size(),
            offset: query.offset(),
            limit: query.limit(),
            order_by: query.order_by(),
            query_string: query.query_string(),
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let extractor = self.extractor()?;

        match &self.cli.command {
            Commands::Parse { query } => self.parse(&extractor, query),
            Commands::Respond {
                query,
                count,
                values,
            } => self.respond(&extractor, query, *count, values.as_deref()),
            Commands::Serve { port, items } => {
                let config = ServerConfig {
                    extractor,
                    items: *items,
                };
                serve(config, *port).await
            }
        }
    }

    /// Build the extractor from `--config`, or the defaults
    fn extractor(&self) -> Result<Extractor> {
        match &self.cli.config {
            Some(path) => {
                let config = load_config(path)?;
                tracing::debug!(path = %path.display(), "Loaded pagination config");
                Ok(Extractor::new(config))
            }
            None => Ok(Extractor::default()),
        }
    }

    fn parse(&self, extractor: &Extractor, raw: &str) -> Result<()> {
        let query = extractor.extract(&RawQuery(raw))?;
        self.print(&QuerySummary::from(&query))
    }

    fn respond(
        &self,
        extractor: &Extractor,
        raw: &str,
        count: i64,
        values: Option<&str>,
    ) -> Result<()> {
        let query = extractor.extract(&RawQuery(raw))?;

        let values: Vec<Value> = match values {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };

        if count == 0 && values.is_empty() {
            return self.print(&default_pagination_response::<Value>(&query));
        }
        self.print(&paginated_response(count, &query, values))
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{output}");
        Ok(())
    }
}
