//! Item domain model.
//!
//! # Responsibility
//! - Define the external record shown as one row of a page.
//! - Provide validation used by storage-backed page sources.
//!
//! # Invariants
//! - `id` is stable across fetches and is the only identity key.
//! - `date_end` should not be earlier than `date_start` when both are set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier used to deduplicate items across page fetches.
pub type ItemId = i64;

/// Validation errors for item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title is blank after trim.
    BlankTitle(ItemId),
    /// `date_end` precedes `date_start`.
    InvalidDateRange { id: ItemId, start: i32, end: i32 },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle(id) => write!(f, "item {id} has a blank title"),
            Self::InvalidDateRange { id, start, end } => write!(
                f,
                "item {id}: date_end ({end}) must be >= date_start ({start})"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// One record of the browsed dataset.
///
/// Display attributes are opaque to selection logic; only `id` matters there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    /// Year the work was started. Negative values are BCE.
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Item {
    /// Creates an item with only identity and title set.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::BlankTitle(self.id));
        }
        if let (Some(start), Some(end)) = (self.date_start, self.date_end) {
            if end < start {
                return Err(ItemValidationError::InvalidDateRange {
                    id: self.id,
                    start,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Human-readable date range, e.g. `1890`, `1890–1895`.
    pub fn date_label(&self) -> Option<String> {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start != end => Some(format!("{start}–{end}")),
            (Some(year), _) | (None, Some(year)) => Some(year.to_string()),
            (None, None) => None,
        }
    }
}
