//! Common types used throughout pagy
//!
//! This module contains shared type definitions and defaults used by both
//! the query extractor and the response builder.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Defaults
// ============================================================================

/// Page size used when the request carries none
pub const DEFAULT_SIZE: i64 = 10;

/// Sort field used when the request carries none
pub const DEFAULT_ORDER_FIELD: &str = "id";

// ============================================================================
// Sort Direction
// ============================================================================

/// Direction of the order clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// Resolve a raw `orderDir` value.
    ///
    /// Empty input and any casing of `"asc"` give `Asc`. Everything else,
    /// typos included, falls back to `Desc`.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// SQL keyword for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Check if this is `Asc`
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
