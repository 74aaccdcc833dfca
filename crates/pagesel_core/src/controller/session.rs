//! Browse session: single-threaded event dispatch over store and controller.
//!
//! # Responsibility
//! - Own the one `SelectionStore` of a session and thread it through the
//!   controller and the drawer.
//! - Run each `BrowseEvent` handler to completion before the next one.
//!
//! # Invariants
//! - Rejected bulk input and failed fetches leave the selection untouched.
//! - Bulk-select unions the genuine first N items of the dataset, fetching
//!   pages beyond the loaded one when N exceeds it.

use crate::config::BrowseConfig;
use crate::controller::page_controller::{FetchOutcome, FetchTicket, PageController};
use crate::model::item::Item;
use crate::selection::bulk::{clamp_bulk_count, collect_prefix, parse_bulk_count, InvalidBulkCount};
use crate::selection::drawer::DrawerView;
use crate::selection::store::SelectionStore;
use crate::source::{FetchFailure, PageSource};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User or widget event delivered to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    PageIndexChanged(u32),
    PageSizeChanged(u32),
    /// Widget-reported checked subset of the loaded page.
    SelectionChanged(Vec<Item>),
    /// Raw text of the bulk-select control.
    BulkSelectSubmitted(String),
    ClearRequested,
}

/// Recoverable session failures surfaced to the error-display collaborator.
#[derive(Debug)]
pub enum SessionError {
    Fetch(FetchFailure),
    InvalidBulkCount(InvalidBulkCount),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::InvalidBulkCount(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            Self::InvalidBulkCount(err) => Some(err),
        }
    }
}

impl From<FetchFailure> for SessionError {
    fn from(value: FetchFailure) -> Self {
        Self::Fetch(value)
    }
}

impl From<InvalidBulkCount> for SessionError {
    fn from(value: InvalidBulkCount) -> Self {
        Self::InvalidBulkCount(value)
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

/// One browsing session over a page source.
pub struct BrowseSession<S: PageSource> {
    source: S,
    store: SelectionStore,
    controller: PageController,
}

impl<S: PageSource> BrowseSession<S> {
    /// Creates a session with an empty selection. No page is fetched yet.
    pub fn new(source: S, config: BrowseConfig) -> Self {
        Self {
            source,
            store: SelectionStore::new(),
            controller: PageController::new(config),
        }
    }

    /// Loads the configured initial page.
    pub fn start(&mut self) -> SessionResult<FetchOutcome> {
        let ticket = self.controller.request_current();
        self.run_fetch(ticket)
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn drawer(&self) -> DrawerView {
        DrawerView::from_store(&self.store)
    }

    /// Handles one event to completion.
    pub fn dispatch(&mut self, event: BrowseEvent) -> SessionResult<()> {
        match event {
            BrowseEvent::PageIndexChanged(page_index) => {
                let ticket = self.controller.set_page_index(page_index);
                self.run_fetch(ticket).map(|_| ())
            }
            BrowseEvent::PageSizeChanged(page_size) => {
                let ticket = self.controller.set_page_size(page_size);
                self.run_fetch(ticket).map(|_| ())
            }
            BrowseEvent::SelectionChanged(checked_subset) => {
                self.controller.reconcile(&mut self.store, &checked_subset);
                Ok(())
            }
            BrowseEvent::BulkSelectSubmitted(input) => self.bulk_select(&input),
            BrowseEvent::ClearRequested => {
                self.store.clear();
                self.controller.refresh_visible(&self.store);
                info!("event=selection_clear module=session status=ok");
                Ok(())
            }
        }
    }

    fn run_fetch(&mut self, ticket: FetchTicket) -> SessionResult<FetchOutcome> {
        let result = self.source.fetch_page(ticket.request());
        Ok(self.controller.complete_fetch(ticket, result, &self.store)?)
    }

    fn bulk_select(&mut self, input: &str) -> SessionResult<()> {
        let requested = match parse_bulk_count(input) {
            Ok(count) => count,
            Err(err) => {
                warn!("event=bulk_select module=session status=rejected error={err}");
                return Err(err.into());
            }
        };

        let count = clamp_bulk_count(requested, self.controller.total_count());
        if count == 0 {
            info!("event=bulk_select module=session status=noop reason=empty_dataset");
            return Ok(());
        }

        let prefix = collect_prefix(
            &self.source,
            self.controller.current_page(),
            count,
            self.controller.page_size(),
        )
        .map_err(|err| {
            warn!("event=bulk_select module=session status=error count={count} error={err}");
            err
        })?;

        self.store.bulk_select_first_n(&prefix);
        self.controller.refresh_visible(&self.store);
        info!(
            "event=bulk_select module=session status=ok requested={} applied={} total_selected={}",
            requested,
            prefix.len(),
            self.store.len()
        );
        Ok(())
    }
}
