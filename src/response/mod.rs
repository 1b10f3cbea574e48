//! Response building module
//!
//! Wraps a page of rows with total count, total pages, page, size and
//! has-more metadata. Nothing here fails.

mod metadata;
mod types;

pub use metadata::{has_more, total_pages};
pub use types::{default_pagination_response, paginated_response, PaginationResponse};
