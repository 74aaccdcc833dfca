//! Browse session configuration.
//!
//! # Responsibility
//! - Hold the initial navigation state for a browse session.
//! - Normalize caller-provided page size and index.
//!
//! # Invariants
//! - Page size defaults to 10 and is clamped to `[1, 100]`.
//! - Page index is never below 1.

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_MAX: u32 = 100;

/// Initial navigation state for a browse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseConfig {
    pub initial_page: u32,
    pub page_size: u32,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            initial_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseConfig {
    /// Returns a copy with page index and size normalized.
    pub fn normalized(self) -> Self {
        Self {
            initial_page: normalize_page_index(self.initial_page),
            page_size: normalize_page_size(Some(self.page_size)),
        }
    }
}

/// Applies default and upper bound to a requested page size.
pub fn normalize_page_size(page_size: Option<u32>) -> u32 {
    match page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(size) => size.min(PAGE_SIZE_MAX),
    }
}

pub fn normalize_page_index(page_index: u32) -> u32 {
    page_index.max(1)
}
