//! Paginated response envelope

use super::metadata::{has_more, total_pages};
use crate::query::PaginationQuery;
use serde::{Deserialize, Serialize};

/// A page of results with its pagination metadata
///
/// Serializes as
/// `{"total_count", "total_pages", "page", "size", "has_more", "values"}`.
/// `values` is always an array, empty when there are no rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse<T> {
    /// Rows matching across all pages
    pub total_count: i64,
    /// Pages needed for `total_count` rows, see [`total_pages`]
    pub total_pages: i64,
    /// Page number from the query
    pub page: i64,
    /// Page size from the query
    pub size: i64,
    /// More pages follow this one, see [`has_more`]
    pub has_more: bool,
    /// Rows on this page, in order
    pub values: Vec<T>,
}

impl<T> PaginationResponse<T> {
    /// Wrap `values` with metadata derived from `count` and the query
    pub fn new(count: i64, query: &PaginationQuery, values: Vec<T>) -> Self {
        Self {
            total_count: count,
            total_pages: total_pages(count, query.size()),
            page: query.page(),
            size: query.size(),
            has_more: has_more(query.page(), count, query.size()),
            values,
        }
    }

    /// Response for a query that matched nothing
    pub fn empty(query: &PaginationQuery) -> Self {
        Self::new(0, query, Vec::new())
    }

    /// Convert the rows, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginationResponse<U> {
        PaginationResponse {
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
            has_more: self.has_more,
            values: self.values.into_iter().map(f).collect(),
        }
    }

    /// Number of rows on this page
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this page has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build a response for one page of `items` out of `count` total rows
pub fn paginated_response<T>(
    count: i64,
    query: &PaginationQuery,
    items: Vec<T>,
) -> PaginationResponse<T> {
    PaginationResponse::new(count, query, items)
}

/// Build an empty response, for "no results" short-circuits
pub fn default_pagination_response<T>(query: &PaginationQuery) -> PaginationResponse<T> {
    PaginationResponse::empty(query)
}
