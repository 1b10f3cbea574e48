//! The normalized pagination descriptor
//!
//! A `PaginationQuery` is built fresh for every request, filled in by the
//! setters below and then read by the host when it runs its data query.

use crate::error::{Error, Result};
use crate::types::{SortDirection, DEFAULT_ORDER_FIELD, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};

/// Page, size and ordering requested by a client
///
/// The sort field and direction are kept apart; [`order_by`](Self::order_by)
/// joins them into the `"<field> <DIR>"` clause a query builder expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    size: i64,
    page: i64,
    #[serde(rename = "orderBy")]
    order_field: String,
    order_dir: SortDirection,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            page: 0,
            order_field: DEFAULT_ORDER_FIELD.to_string(),
            order_dir: SortDirection::Asc,
        }
    }
}

impl PaginationQuery {
    /// Create a query for a page of the given size, ordered by `id ASC`
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            size,
            page,
            ..Default::default()
        }
    }

    /// Replace the ordering
    pub fn with_order(mut self, field: impl Into<String>, dir: SortDirection) -> Self {
        self.order_field = field.into();
        self.order_dir = dir;
        self
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the page size from a raw query value.
    ///
    /// An empty value selects the default size of 10. Any integer is
    /// accepted as-is, including zero and negatives.
    pub fn set_size(&mut self, raw: &str) -> Result<()> {
        self.set_size_with(raw, DEFAULT_SIZE, "size")
    }

    /// Set the page number from a raw query value.
    ///
    /// An empty value leaves the query untouched.
    pub fn set_page(&mut self, raw: &str) -> Result<()> {
        self.set_page_with(raw, "page")
    }

    /// Set the ordering from raw `orderBy` and `orderDir` values. Never fails.
    ///
    /// An empty field selects `id`. The direction is `ASC` for an empty value
    /// or any casing of `asc`, and `DESC` for anything else.
    pub fn set_order_by(&mut self, field: &str, dir: &str) {
        self.set_order_by_with(field, dir, DEFAULT_ORDER_FIELD);
    }

    pub(crate) fn set_size_with(&mut self, raw: &str, default: i64, param: &str) -> Result<()> {
        self.size = if raw.is_empty() {
            default
        } else {
            parse_int(param, raw)?
        };
        Ok(())
    }

    pub(crate) fn set_page_with(&mut self, raw: &str, param: &str) -> Result<()> {
        if !raw.is_empty() {
            self.page = parse_int(param, raw)?;
        }
        Ok(())
    }

    pub(crate) fn set_order_by_with(&mut self, field: &str, dir: &str, default_field: &str) {
        self.order_field = if field.is_empty() {
            default_field.to_string()
        } else {
            field.to_string()
        };
        self.order_dir = SortDirection::parse_lenient(dir);
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Row offset of the first row on this page.
    ///
    /// Page `0` means no offset. Saturates instead of overflowing.
    pub fn offset(&self) -> i64 {
        if self.page == 0 {
            return 0;
        }
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// Number of rows to fetch
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Combined order clause, e.g. `"first_name DESC"`
    pub fn order_by(&self) -> String {
        format!("{} {}", self.order_field, self.order_dir)
    }

    /// Example query string for this descriptor, for logs and docs
    pub fn query_string(&self) -> String {
        format!(
            "page={}&size={}&orderBy={}",
            self.page,
            self.size,
            self.order_by()
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// 1-based page number, `0` when none was given
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Sort field without the direction
    pub fn order_field(&self) -> &str {
        &self.order_field
    }

    /// Sort direction
    pub fn order_dir(&self) -> SortDirection {
        self.order_dir
    }
}

fn parse_int(param: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|e| Error::parse(param, raw, e))
}
