//! Page source contract and implementations.
//!
//! # Responsibility
//! - Define the paginated fetch contract the controller depends on.
//! - Provide SQLite-backed and in-memory sources.
//!
//! # Invariants
//! - A source is stateless per call; the same request yields the same page
//!   while the dataset is unchanged.
//! - Any failure is reported as `FetchFailure`; callers never retry.

use crate::db::DbError;
use crate::model::item::ItemValidationError;
use crate::model::page::{Page, PageRequest};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub type FetchResult<T> = Result<T, FetchFailure>;

/// Failure of one page fetch.
#[derive(Debug)]
pub enum FetchFailure {
    /// The source rejected the request or its transport failed.
    Source(String),
    /// Storage-layer failure.
    Db(DbError),
    /// Fetched data violates item invariants.
    InvalidData(String),
}

impl Display for FetchFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(message) => write!(f, "page fetch failed: {message}"),
            Self::Db(err) => write!(f, "page fetch failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid page data: {message}"),
        }
    }
}

impl Error for FetchFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Source(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for FetchFailure {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for FetchFailure {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<ItemValidationError> for FetchFailure {
    fn from(value: ItemValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Paginated dataset provider.
pub trait PageSource {
    /// Fetches one page and the dataset's total item count.
    fn fetch_page(&self, request: &PageRequest) -> FetchResult<Page>;
}
