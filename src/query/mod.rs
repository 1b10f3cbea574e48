//! Query extraction module
//!
//! Turns the raw `page`, `size`, `orderBy` and `orderDir` query parameters
//! of a request into a validated [`PaginationQuery`].
//!
//! # Overview
//!
//! Only `page` and `size` can fail, and only when present and not an
//! integer. Everything else falls back to a default: size 10, no page
//! offset, ordering by `id ASC`.

mod extractor;
mod source;
mod types;

pub use extractor::{pagination_from_request, Extractor};
pub use source::{QuerySource, RawQuery};
pub use types::PaginationQuery;
