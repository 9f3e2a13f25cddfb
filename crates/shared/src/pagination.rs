//! Offset-based pagination utilities.

use serde::{Deserialize, Serialize};

/// A single page of a larger result set.
///
/// Page numbers are 1-based. A page size of zero means "everything on one
/// page", so `total_pages` is 1 and no items are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items: Vec<T>,
}

impl<T> PagedResult<T> {
    /// Creates an empty page; `total_pages` is derived from the counts.
    pub fn new(total_items: i64, page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
            total_pages: compute_total_pages(total_items, page_size),
            total_items,
            items: Vec::new(),
        }
    }

    /// Attaches the items for this page.
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Number of items to skip to reach this page.
    pub fn skip_size(&self) -> i64 {
        if self.page_number > 0 && self.page_size > 0 {
            (self.page_number - 1).saturating_mul(self.page_size)
        } else {
            0
        }
    }

    /// Whether a page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Converts the items while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// `ceil(total_items / page_size)` for positive page sizes, otherwise 1.
fn compute_total_pages(total_items: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    let quotient = total_items / page_size;
    if total_items % page_size > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Total count plus the items of one page, as returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedModel<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> PagedModel<T> {
    pub fn new(total: i64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<T> From<PagedResult<T>> for PagedModel<T> {
    fn from(page: PagedResult<T>) -> Self {
        Self {
            total: page.total_items,
            items: page.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PagedResult<()> = PagedResult::new(25, 1, 10);
        assert_eq!(page.total_pages, 3);

        let page: PagedResult<()> = PagedResult::new(30, 1, 10);
        assert_eq!(page.total_pages, 3);

        let page: PagedResult<()> = PagedResult::new(1, 1, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_total_pages_matches_ceiling_for_positive_sizes() {
        for total in 0..50i64 {
            for size in 1..12i64 {
                let page: PagedResult<()> = PagedResult::new(total, 1, size);
                let expected = (total as f64 / size as f64).ceil() as i64;
                assert_eq!(page.total_pages, expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_zero_items_has_zero_pages() {
        let page: PagedResult<()> = PagedResult::new(0, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_zero_page_size() {
        let page: PagedResult<()> = PagedResult::new(42, 3, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.skip_size(), 0);
    }

    #[test]
    fn test_skip_size() {
        let page: PagedResult<()> = PagedResult::new(100, 1, 10);
        assert_eq!(page.skip_size(), 0);

        let page: PagedResult<()> = PagedResult::new(100, 4, 10);
        assert_eq!(page.skip_size(), 30);
    }

    #[test]
    fn test_skip_size_with_non_positive_page_number() {
        let page: PagedResult<()> = PagedResult::new(100, 0, 10);
        assert_eq!(page.skip_size(), 0);

        let page: PagedResult<()> = PagedResult::new(100, -2, 10);
        assert_eq!(page.skip_size(), 0);
    }

    #[test]
    fn test_skip_size_saturates_on_huge_pages() {
        let result: PagedResult<i32> = PagedResult::new(10, i64::MAX, i64::MAX);
        assert_eq!(result.skip_size(), i64::MAX);
    }

    #[test]
    fn test_has_next_page() {
        let page: PagedResult<()> = PagedResult::new(25, 2, 10);
        assert!(page.has_next_page());

        let page: PagedResult<()> = PagedResult::new(25, 3, 10);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = PagedResult::new(3, 1, 2).with_items(vec![1, 2]);
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total_pages, 2);
        assert_eq!(mapped.total_items, 3);
    }

    #[test]
    fn test_paged_result_serialization() {
        let page = PagedResult::new(11, 2, 5).with_items(vec!["a"]);
        let json = serde_json::to_string(&page).unwrap();

        assert!(json.contains("\"pageNumber\":2"));
        assert!(json.contains("\"pageSize\":5"));
        assert!(json.contains("\"totalPages\":3"));
        assert!(json.contains("\"totalItems\":11"));
        assert!(json.contains("\"items\":[\"a\"]"));
    }

    #[test]
    fn test_paged_model_from_result() {
        let page = PagedResult::new(7, 1, 5).with_items(vec![1, 2, 3, 4, 5]);
        let model: PagedModel<i32> = page.into();

        assert_eq!(model.total, 7);
        assert_eq!(model.items.len(), 5);
        assert_eq!(PagedModel::<i32>::empty().total, 0);
    }
}
