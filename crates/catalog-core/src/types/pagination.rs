//! Pagination types for list endpoints.
//!
//! A raw [`PageRequest`] arrives from the presentation boundary and is
//! normalized into a [`PageQuery`] that stores execute. The store's slice of
//! records plus its total count are then assembled into a [`PageResponse`],
//! which also carries the navigation window of page numbers.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::sorting::{SortField, SortOrder, Sortable};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default number of page links in a navigation window.
pub const DEFAULT_WINDOW_SIZE: u64 = 10;

/// Raw paging parameters as received from a caller.
///
/// Every field may be missing or out of range; [`PageRequest::normalize`]
/// turns them into a canonical [`PageQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of items per page.
    #[serde(default)]
    pub size: Option<i64>,
    /// Requested ordering, most significant first.
    #[serde(default)]
    pub sort: Vec<SortField>,
}

impl PageRequest {
    /// Create a page request without explicit ordering.
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: Vec::new(),
        }
    }

    /// Append a sort term.
    pub fn sorted_by(mut self, field: SortField) -> Self {
        self.sort.push(field);
        self
    }

    /// Normalize using the default page size.
    pub fn normalize<E: Sortable>(&self) -> AppResult<PageQuery> {
        self.normalize_with::<E>(DEFAULT_PAGE_SIZE)
    }

    /// Normalize into a bounded, deterministic query descriptor.
    ///
    /// - Missing or non-positive page number becomes 1.
    /// - Missing or non-positive page size becomes `default_size`.
    /// - Missing sort becomes `E::default_sort()`.
    /// - Any sort field `E` cannot order by fails with
    ///   [`ErrorKind::InvalidSortField`](crate::error::ErrorKind::InvalidSortField).
    pub fn normalize_with<E: Sortable>(&self, default_size: u64) -> AppResult<PageQuery> {
        let page = match self.page {
            Some(page) if page > 0 => page as u64,
            _ => 1,
        };

        let size = match self.size {
            Some(size) if size > 0 => size as u64,
            _ => default_size.max(1),
        };

        let mut sort: Vec<SortOrder> = if self.sort.is_empty() {
            E::default_sort()
        } else {
            let mut orders = Vec::with_capacity(self.sort.len() + 1);
            for requested in &self.sort {
                let column = E::sort_column(&requested.field)
                    .ok_or_else(|| AppError::invalid_sort_field(&requested.field))?;
                // First mention of a column wins.
                if !orders.iter().any(|o: &SortOrder| o.column == column) {
                    orders.push(SortOrder::new(column, requested.direction));
                }
            }
            orders
        };

        let tiebreaker = E::tiebreaker();
        if !sort.iter().any(|o| o.column == tiebreaker) {
            sort.push(SortOrder::new(tiebreaker, Default::default()));
        }

        Ok(PageQuery { page, size, sort })
    }
}

/// Canonical query descriptor produced by [`PageRequest::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    page: u64,
    size: u64,
    sort: Vec<SortOrder>,
}

impl PageQuery {
    /// Page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of items per page, always at least 1.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Zero-based row offset of the first record on this page.
    ///
    /// Capped at `i64::MAX` so it always fits a signed SQL bind.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.size)
            .min(i64::MAX as u64)
    }

    /// Maximum number of rows to fetch.
    pub fn limit(&self) -> u64 {
        self.size
    }

    /// Ordering terms, most significant first.
    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }
}

/// One page of results plus its navigation metadata.
///
/// Built once from a store result and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    items: Vec<T>,
    page: u64,
    size: u64,
    total_items: u64,
    total_pages: u64,
    start: u64,
    end: u64,
    page_list: Vec<u64>,
    has_previous: bool,
    has_next: bool,
}

impl<T> PageResponse<T> {
    /// Assemble a page from store records, converting each one in order.
    ///
    /// `total_items` is the store's count across all pages. The requested
    /// page number is reported as-is even when it lies past the last page.
    pub fn from_records<E, I, F>(
        records: I,
        total_items: u64,
        query: &PageQuery,
        window_size: u64,
        convert: F,
    ) -> Self
    where
        I: IntoIterator<Item = E>,
        F: FnMut(E) -> T,
    {
        let items: Vec<T> = records.into_iter().map(convert).collect();
        let page = query.page();
        let size = query.size();

        let total_pages = total_items.div_ceil(size).max(1);

        let window = window_size.max(1);
        let start = ((page - 1) / window) * window + 1;
        let end = start.saturating_add(window - 1).min(total_pages);
        let page_list: Vec<u64> = (start..=end).collect();

        Self {
            items,
            page,
            size,
            total_items,
            total_pages,
            start,
            end,
            page_list,
            has_previous: start > 1,
            has_next: end < total_pages,
        }
    }

    /// Create a page with the default navigation window.
    pub fn new(items: Vec<T>, query: &PageQuery, total_items: u64) -> Self {
        Self::from_records(items, total_items, query, DEFAULT_WINDOW_SIZE, |item| item)
    }

    /// Create an empty page.
    pub fn empty(query: &PageQuery) -> Self {
        Self::new(Vec::new(), query, 0)
    }

    /// Convert the items while keeping all paging metadata.
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            start: self.start,
            end: self.end,
            page_list: self.page_list,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }

    /// The items on this page, in store order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Requested page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Page size used for the query.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Total number of pages, at least 1.
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// First page number of the navigation window.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last page number of the navigation window.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Page numbers in the navigation window; empty when `start > end`.
    pub fn page_list(&self) -> &[u64] {
        &self.page_list
    }

    /// Whether a window precedes this one.
    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether a window follows this one.
    pub fn has_next(&self) -> bool {
        self.has_next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::sorting::SortDirection;

    struct Row;

    impl Sortable for Row {
        fn sort_column(field: &str) -> Option<&'static str> {
            match field {
                "id" => Some("id"),
                "name" => Some("name"),
                "price" => Some("price"),
                _ => None,
            }
        }

        fn default_sort() -> Vec<SortOrder> {
            vec![SortOrder::new("id", SortDirection::Desc)]
        }

        fn tiebreaker() -> &'static str {
            "id"
        }
    }

    fn query(page: i64, size: i64) -> PageQuery {
        PageRequest::new(page, size).normalize::<Row>().unwrap()
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let query = PageRequest::default().normalize::<Row>().unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(query.offset(), 0);
        assert_eq!(query.sort(), &[SortOrder::new("id", SortDirection::Desc)]);
    }

    #[test]
    fn test_non_positive_values_are_replaced() {
        let query = PageRequest::new(-3, 0).normalize::<Row>().unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), 10);

        let query = PageRequest::new(0, -5).normalize_with::<Row>(25).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 25);
    }

    #[test]
    fn test_offset_and_limit() {
        let query = query(4, 20);
        assert_eq!(query.offset(), 60);
        assert_eq!(query.limit(), 20);
    }

    #[test]
    fn test_offset_is_capped_for_huge_pages() {
        let wide = query(i64::MAX, 1000);
        assert_eq!(wide.page(), i64::MAX as u64);
        assert_eq!(wide.offset(), i64::MAX as u64);
        assert!(i64::try_from(wide.offset()).is_ok());

        let narrow = query(i64::MAX, 1);
        assert_eq!(narrow.offset(), i64::MAX as u64 - 1);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let err = PageRequest::new(1, 10)
            .sorted_by(SortField::asc("price"))
            .sorted_by(SortField::desc("colour"))
            .normalize::<Row>()
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidSortField);
        assert!(err.message.contains("colour"));
    }

    #[test]
    fn test_requested_sort_gets_tiebreaker() {
        let query = PageRequest::new(1, 10)
            .sorted_by(SortField::desc("price"))
            .sorted_by(SortField::asc("price"))
            .normalize::<Row>()
            .unwrap();

        assert_eq!(
            query.sort(),
            &[
                SortOrder::new("price", SortDirection::Desc),
                SortOrder::new("id", SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn test_tiebreaker_not_duplicated() {
        let query = PageRequest::new(1, 10)
            .sorted_by(SortField::asc("id"))
            .normalize::<Row>()
            .unwrap();
        assert_eq!(query.sort(), &[SortOrder::new("id", SortDirection::Asc)]);
    }

    #[test]
    fn test_empty_result() {
        let page: PageResponse<u32> = PageResponse::empty(&query(1, 10));
        assert_eq!(page.total_pages(), 1);
        assert!(page.items().is_empty());
        assert_eq!((page.start(), page.end()), (1, 1));
        assert_eq!(page.page_list(), &[1]);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        for size in 1..=12 {
            for total in 0..=130u64 {
                let page: PageResponse<u32> = PageResponse::new(vec![], &query(1, size), total);
                let expected = total.div_ceil(size as u64).max(1);
                assert_eq!(page.total_pages(), expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_window_is_aligned_and_contains_current_page() {
        for total in [1u64, 9, 10, 11, 95, 100, 101, 250] {
            let total_pages = total.div_ceil(10);
            for current in 1..=total_pages {
                let page: PageResponse<u32> =
                    PageResponse::new(vec![], &query(current as i64, 10), total);
                assert_eq!(page.start() % 10, 1, "start must be 10k+1");
                assert!(page.start() <= current && current <= page.end());
                assert!(page.end() <= page.total_pages());
                assert_eq!(page.page(), current);
            }
        }
    }

    #[test]
    fn test_ninety_five_items_first_window() {
        let page: PageResponse<u32> = PageResponse::new(vec![], &query(1, 10), 95);
        assert_eq!(page.total_pages(), 10);
        assert_eq!((page.start(), page.end()), (1, 10));
        assert_eq!(page.page_list(), (1..=10u64).collect::<Vec<_>>().as_slice());
        assert!(!page.has_previous());
        // end = min(start + W - 1, total_pages) = 10 = total_pages, so has_next is false.
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_past_the_end_keeps_requested_number() {
        let page: PageResponse<u32> = PageResponse::new(vec![], &query(11, 10), 95);
        assert_eq!(page.page(), 11);
        assert_eq!((page.start(), page.end()), (11, 10));
        assert!(page.page_list().is_empty());
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_next_window_flag() {
        let page: PageResponse<u32> = PageResponse::new(vec![], &query(3, 10), 250);
        assert_eq!(page.total_pages(), 25);
        assert_eq!((page.start(), page.end()), (1, 10));
        assert!(page.has_next());

        let page: PageResponse<u32> = PageResponse::new(vec![], &query(14, 10), 250);
        assert_eq!((page.start(), page.end()), (11, 20));
        assert!(page.has_previous());
        assert!(page.has_next());

        let page: PageResponse<u32> = PageResponse::new(vec![], &query(25, 10), 250);
        assert_eq!((page.start(), page.end()), (21, 25));
        assert!(!page.has_next());
    }

    #[test]
    fn test_custom_window_size() {
        let page: PageResponse<u32> =
            PageResponse::from_records(Vec::<u32>::new(), 100, &query(7, 5), 5, |x| x);
        assert_eq!(page.total_pages(), 20);
        assert_eq!(page.page_list(), &[6, 7, 8, 9, 10]);

        let page: PageResponse<u32> =
            PageResponse::from_records(Vec::<u32>::new(), 100, &query(7, 5), 0, |x| x);
        assert_eq!(page.page_list(), &[7]);
    }

    #[test]
    fn test_conversion_preserves_order_and_map_keeps_metadata() {
        let page = PageResponse::from_records(vec![3u32, 1, 2], 23, &query(2, 3), 10, |n| n * 10);
        assert_eq!(page.items(), &[30, 10, 20]);

        let mapped = page.clone().map(|n| n.to_string());
        assert_eq!(mapped.items(), &["30", "10", "20"]);
        assert_eq!(mapped.total_pages(), page.total_pages());
        assert_eq!(mapped.page_list(), page.page_list());
    }
}
