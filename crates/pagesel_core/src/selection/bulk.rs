//! Bulk "select first N" input handling and prefix assembly.
//!
//! # Responsibility
//! - Parse the user-entered count and reject non-numeric or non-positive input.
//! - Assemble the first-N prefix of the dataset, fetching extra pages when N
//!   exceeds what is loaded.
//!
//! # Invariants
//! - A rejected count never reaches the selection store.
//! - Prefix assembly is all-or-nothing: any fetch failure yields no prefix.

use crate::model::item::Item;
use crate::model::page::{pages_needed, Page, PageRequest};
use crate::source::{FetchResult, PageSource};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU64;

/// Rejected bulk-select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBulkCount {
    /// Input is not an integer.
    NotANumber(String),
    /// Input is zero or negative.
    NotPositive(i64),
}

impl Display for InvalidBulkCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(value) => write!(f, "bulk count is not a number: `{value}`"),
            Self::NotPositive(value) => write!(f, "bulk count must be positive, got {value}"),
        }
    }
}

impl Error for InvalidBulkCount {}

/// Parses user input for the bulk-select control.
pub fn parse_bulk_count(input: &str) -> Result<NonZeroU64, InvalidBulkCount> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InvalidBulkCount::NotANumber(trimmed.to_string()))?;
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(InvalidBulkCount::NotPositive(value))
}

/// Clamps a requested count to `[1, total_count]`.
///
/// Returns `0` only when the dataset is empty.
pub fn clamp_bulk_count(requested: NonZeroU64, total_count: u64) -> u64 {
    requested.get().min(total_count)
}

/// Builds the first `count` items of the dataset in canonical order.
///
/// `loaded` is reused when it is page 1 and already covers `count`; otherwise
/// pages `1..=ceil(count / page_size)` are fetched from `source`.
pub fn collect_prefix<S: PageSource + ?Sized>(
    source: &S,
    loaded: Option<&Page>,
    count: u64,
    page_size: u32,
) -> FetchResult<Vec<Item>> {
    let limit = usize::try_from(count).unwrap_or(usize::MAX);

    if let Some(page) = loaded.filter(|page| page.page_index == 1) {
        if page.items.len() >= limit {
            return Ok(page.items[..limit].to_vec());
        }
    }

    let last_page = pages_needed(count, page_size);
    let mut prefix = Vec::with_capacity(limit.min(1024));
    for page_index in 1..=last_page {
        let page = source.fetch_page(&PageRequest::new(page_index, page_size))?;
        let short_page = page.items.len() < page_size as usize;
        prefix.extend(page.items);
        if short_page {
            break;
        }
    }
    prefix.truncate(limit);

    debug!(
        "event=bulk_prefix module=selection status=ok requested={} collected={} pages={}",
        count,
        prefix.len(),
        last_page
    );
    Ok(prefix)
}
