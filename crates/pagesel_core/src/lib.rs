//! Cross-page selection over a server-paginated dataset.
//! Only the loaded page is resident; the selection survives navigation.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod selection;
pub mod source;

pub use config::{normalize_page_size, BrowseConfig, DEFAULT_PAGE_SIZE, PAGE_SIZE_MAX};
pub use controller::page_controller::{FetchOutcome, FetchTicket, PageController};
pub use controller::session::{BrowseEvent, BrowseSession, SessionError, SessionResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use model::page::{Page, PageRequest};
pub use selection::bulk::{parse_bulk_count, InvalidBulkCount};
pub use selection::drawer::{DrawerEntry, DrawerView};
pub use selection::store::SelectionStore;
pub use source::memory::InMemoryPageSource;
pub use source::sqlite::SqliteItemSource;
pub use source::{FetchFailure, FetchResult, PageSource};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
