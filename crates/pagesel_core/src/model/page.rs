//! Page request and response envelopes.
//!
//! # Invariants
//! - `page_index` is 1-based.
//! - `Page::items` is in final display order; the core never reorders it.

use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// One page fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page index. `new` clamps it to >= 1.
    pub page_index: u32,
    /// Rows per page. `new` clamps it to >= 1.
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Number of rows preceding this page in canonical order.
    ///
    /// A zero `page_index` (possible through deserialization) reads as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Items of one page plus the total item count of the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_index: u32,
    pub items: Vec<Item>,
    pub total_count: u64,
}

impl Page {
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }
}

/// Returns how many pages of `page_size` are needed for `count` items.
pub fn pages_needed(count: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = count.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{pages_needed, PageRequest};

    #[test]
    fn request_clamps_zero_values() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page_index, 1);
        assert_eq!(request.page_size, 1);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn zero_page_index_from_literal_offsets_to_start() {
        let request = PageRequest {
            page_index: 0,
            page_size: 10,
        };
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn pages_needed_rounds_up() {
        assert_eq!(pages_needed(0, 10), 0);
        assert_eq!(pages_needed(10, 10), 1);
        assert_eq!(pages_needed(11, 10), 2);
        assert_eq!(pages_needed(25, 10), 3);
    }
}
