//! Page count arithmetic
//!
//! Both functions treat a page size of zero or less as "nothing to page
//! through" rather than dividing by it.

/// Number of pages needed to hold `total_count` rows, rounded up.
///
/// Returns `0` when there are no rows or `page_size <= 0`.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total_count <= 0 {
        return 0;
    }
    total_count / page_size + i64::from(total_count % page_size != 0)
}

/// Whether pages exist beyond `current_page`.
///
/// Uses truncating division, so a trailing partial page is not counted:
/// `has_more(15, 155, 10)` is `false`. Returns `false` when `page_size <= 0`.
pub fn has_more(current_page: i64, total_count: i64, page_size: i64) -> bool {
    if page_size <= 0 {
        return false;
    }
    current_page < total_count / page_size
}
