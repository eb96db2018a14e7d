use serde::Serialize;

use crate::models::person::PersonSummary;

/// Fixed page size reported to the client, independent of the upstream limit.
pub const ITEMS_PER_PAGE: usize = 5;

/// `{"success": true, "data": ...}` envelope. Failures go through `AppError`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub total_results: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
}

impl Pagination {
    pub fn for_total(total_results: usize) -> Self {
        Self {
            total_results,
            total_pages: total_results.div_ceil(ITEMS_PER_PAGE),
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchData {
    pub results: Vec<PersonSummary>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(Pagination::for_total(1).total_pages, 1);
        assert_eq!(Pagination::for_total(5).total_pages, 1);
        assert_eq!(Pagination::for_total(6).total_pages, 2);
        assert_eq!(Pagination::for_total(100).total_pages, 20);
    }

    #[test]
    fn test_items_per_page_is_fixed() {
        assert_eq!(Pagination::for_total(42).items_per_page, 5);
    }

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(Success::new(Pagination::for_total(3))).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["total_pages"], 1);
    }
}
