//! In-memory page source.
//!
//! Slices a fully materialized dataset into pages. Can be told to fail
//! specific page indexes.

use crate::model::item::Item;
use crate::model::page::{Page, PageRequest};
use crate::source::{FetchFailure, FetchResult, PageSource};
use std::cell::Cell;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct InMemoryPageSource {
    items: Vec<Item>,
    failing_pages: HashSet<u32>,
    fetch_count: Cell<usize>,
}

impl InMemoryPageSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Makes every fetch of `page_index` fail.
    pub fn with_failing_page(mut self, page_index: u32) -> Self {
        self.failing_pages.insert(page_index);
        self
    }

    pub fn set_failing(&mut self, page_index: u32, failing: bool) {
        if failing {
            self.failing_pages.insert(page_index);
        } else {
            self.failing_pages.remove(&page_index);
        }
    }

    /// Number of `fetch_page` calls served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }
}

impl PageSource for InMemoryPageSource {
    fn fetch_page(&self, request: &PageRequest) -> FetchResult<Page> {
        self.fetch_count.set(self.fetch_count.get() + 1);

        if self.failing_pages.contains(&request.page_index) {
            return Err(FetchFailure::Source(format!(
                "page {} unavailable",
                request.page_index
            )));
        }

        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = self
            .items
            .iter()
            .skip(start)
            .take(request.page_size as usize)
            .cloned()
            .collect();

        Ok(Page {
            page_index: request.page_index,
            items,
            total_count: self.items.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryPageSource;
    use crate::model::item::Item;
    use crate::model::page::PageRequest;
    use crate::source::{FetchFailure, PageSource};

    fn dataset(count: i64) -> Vec<Item> {
        (1..=count)
            .map(|id| Item::new(id, format!("item {id}")))
            .collect()
    }

    #[test]
    fn last_page_is_short() {
        let source = InMemoryPageSource::new(dataset(25));
        let page = source.fetch_page(&PageRequest::new(3, 10)).unwrap();

        assert_eq!(page.total_count, 25);
        assert_eq!(page.ids().collect::<Vec<_>>(), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_end_is_empty() {
        let source = InMemoryPageSource::new(dataset(5));
        let page = source.fetch_page(&PageRequest::new(4, 10)).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn page_recovers_after_failure_is_lifted() {
        let mut source = InMemoryPageSource::new(dataset(5));
        source.set_failing(1, true);
        assert!(source.fetch_page(&PageRequest::new(1, 5)).is_err());

        source.set_failing(1, false);
        let page = source.fetch_page(&PageRequest::new(1, 5)).unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn failing_page_reports_source_error_and_counts_fetch() {
        let source = InMemoryPageSource::new(dataset(5)).with_failing_page(2);
        let err = source.fetch_page(&PageRequest::new(2, 2)).unwrap_err();

        assert!(matches!(err, FetchFailure::Source(_)));
        assert_eq!(source.fetch_count(), 1);
    }
}
