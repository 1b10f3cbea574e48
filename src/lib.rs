//! # pagy
//!
//! Collect pagination parameters from client requests and return a
//! consistent paginated structure.
//!
//! pagy is not tied to a web framework. Anything that can hand over its
//! query parameters implements [`QuerySource`]: `url::Url`, axum's `Uri`
//! and `Request`, a `HashMap` from a `Query` extractor, or a raw query
//! string wrapped in [`RawQuery`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pagy::{paginated_response, pagination_from_request, RawQuery};
//!
//! let query = pagination_from_request(&RawQuery("page=3&size=10&orderBy=first_name&orderDir=desc"))?;
//! assert_eq!(query.offset(), 20);
//! assert_eq!(query.limit(), 10);
//! assert_eq!(query.order_by(), "first_name DESC");
//!
//! // ... run the data query with offset, limit and order_by ...
//! let rows = vec!["Wick", "Baba Yaga"];
//!
//! let response = paginated_response(150, &query, rows);
//! assert_eq!(response.total_pages, 15);
//! assert!(response.has_more);
//! # Ok::<(), pagy::Error>(())
//! ```
//!
//! ## Defaults
//!
//! | Parameter  | When absent or empty                  |
//! |------------|---------------------------------------|
//! | `page`     | `0`, meaning no offset                |
//! | `size`     | `10`                                  |
//! | `orderBy`  | `id`                                  |
//! | `orderDir` | `ASC`; any value but `asc` is `DESC`  |
//!
//! Parameter names and defaults can be changed with a [`PaginationConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and defaults
pub mod types;

/// Extraction config and YAML loading
pub mod config;

/// Query extraction
pub mod query;

/// Response envelope
pub mod response;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, PaginationConfig};
pub use error::{Error, Result};
pub use query::{pagination_from_request, Extractor, PaginationQuery, QuerySource, RawQuery};
pub use response::{
    default_pagination_response, has_more, paginated_response, total_pages, PaginationResponse,
};
pub use types::SortDirection;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
