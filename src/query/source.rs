//! Request abstractions the extractor can read from
//!
//! Hosts hand the extractor whatever they have: a parsed URL, an axum
//! request or URI, a map from a `Query` extractor, or a bare query string.

use axum::http::{Request, Uri};
use std::collections::HashMap;
use std::hash::BuildHasher;
use url::Url;

/// Read-only access to a request's query parameters
pub trait QuerySource {
    /// First decoded value for `key`, or `None` when the key is absent
    fn query_value(&self, key: &str) -> Option<String>;
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn query_value(&self, key: &str) -> Option<String> {
        (**self).query_value(key)
    }
}

impl<S: BuildHasher> QuerySource for HashMap<String, String, S> {
    fn query_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl QuerySource for Url {
    fn query_value(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// A raw `application/x-www-form-urlencoded` query string.
///
/// A leading `?` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawQuery<'a>(
    /// The query string, without decoding
    pub &'a str,
);

impl QuerySource for RawQuery<'_> {
    fn query_value(&self, key: &str) -> Option<String> {
        let raw = self.0.strip_prefix('?').unwrap_or(self.0);
        url::form_urlencoded::parse(raw.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl QuerySource for Uri {
    fn query_value(&self, key: &str) -> Option<String> {
        self.query().and_then(|q| RawQuery(q).query_value(key))
    }
}

impl<B> QuerySource for Request<B> {
    fn query_value(&self, key: &str) -> Option<String> {
        self.uri().query_value(key)
    }
}
