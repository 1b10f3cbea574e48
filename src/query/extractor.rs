//! Building a `PaginationQuery` from a request

use super::source::QuerySource;
use super::types::PaginationQuery;
use crate::config::PaginationConfig;
use crate::error::Result;

/// Extracts pagination from requests using a [`PaginationConfig`]
///
/// `Extractor::default()` reads `page`, `size`, `orderBy` and `orderDir`
/// with a default size of 10 and a default sort field of `id`.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: PaginationConfig,
}

impl Extractor {
    /// Create an extractor with custom names and defaults
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Names and defaults this extractor applies
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Read the pagination parameters from `source`.
    ///
    /// Missing parameters read as empty. Page is parsed before size and the
    /// first parse failure is returned. Ordering never fails.
    pub fn extract<Q: QuerySource + ?Sized>(&self, source: &Q) -> Result<PaginationQuery> {
        let params = &self.config.params;
        let read = |key: &str| source.query_value(key).unwrap_or_default();

        let mut query = PaginationQuery::default();
        query.set_page_with(&read(params.page_param.as_str()), &params.page_param)?;
        query.set_size_with(
            &read(params.size_param.as_str()),
            self.config.default_size,
            &params.size_param,
        )?;
        query.set_order_by_with(
            &read(params.order_by_param.as_str()),
            &read(params.order_dir_param.as_str()),
            &self.config.default_order_field,
        );

        Ok(query)
    }
}

/// Extract pagination from a request with the default parameter names
pub fn pagination_from_request<Q: QuerySource + ?Sized>(source: &Q) -> Result<PaginationQuery> {
    Extractor::default().extract(source)
}

impl PaginationQuery {
    /// Same as [`pagination_from_request`]
    pub fn from_request<Q: QuerySource + ?Sized>(source: &Q) -> Result<Self> {
        pagination_from_request(source)
    }
}
