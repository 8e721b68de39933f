// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};

/// Offset pagination metadata, always derived from the same filtered
/// set as the page it accompanies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_posts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// `total_pages = ceil(total / limit)`; zero matches mean zero
    /// pages and no next page, while `has_prev_page` stays `page > 1`
    /// even for empty result sets (kept for wire compatibility).
    pub fn compute(page: u64, limit: u64, total: u64) -> Self {
        debug_assert!(limit > 0, "normalizer guarantees limit > 0");
        let total_pages = total.div_ceil(limit.max(1));
        Self {
            current_page: page,
            total_pages,
            total_posts: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(Pagination::compute(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::compute(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::compute(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::compute(1, 3, 7).total_pages, 3);
    }

    #[test]
    fn flags_follow_current_page() {
        let middle = Pagination::compute(2, 1, 3);
        assert!(middle.has_next_page);
        assert!(middle.has_prev_page);

        let first = Pagination::compute(1, 1, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = Pagination::compute(3, 1, 3);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn empty_set_keeps_prev_flag_for_late_pages() {
        let page = Pagination::compute(4, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        // Documented as-is: a caller asking for page 4 of nothing still
        // gets has_prev_page = true.
        assert!(page.has_prev_page);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Pagination::compute(1, 10, 25)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalPosts"], 25);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPrevPage"], false);
    }
}
