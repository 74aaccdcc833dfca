//! Page navigation state and fetch sequencing.
//!
//! # Responsibility
//! - Track requested page index/size, the loaded page and the loading flag.
//! - Issue one fetch ticket per navigation event and apply only the latest.
//! - Keep the visible selection in sync with the selection store.
//!
//! # Invariants
//! - Only the completion of the most recently issued ticket is applied.
//! - A failed fetch leaves the loaded page and the selection untouched.
//! - `visible_selection` is re-derived after every applied fetch and every
//!   reconciliation.

use crate::config::{normalize_page_index, normalize_page_size, BrowseConfig};
use crate::model::item::Item;
use crate::model::page::{Page, PageRequest};
use crate::selection::store::SelectionStore;
use crate::source::{FetchFailure, FetchResult};
use log::{debug, info, warn};

/// Identifies one in-flight page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    request: PageRequest,
}

impl FetchTicket {
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Result of delivering a fetch completion to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page replaced the loaded page.
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

#[derive(Debug)]
pub struct PageController {
    page_index: u32,
    page_size: u32,
    loaded: Option<(PageRequest, Page)>,
    visible: Vec<Item>,
    loading: bool,
    last_error: Option<String>,
    next_seq: u64,
    pending_seq: Option<u64>,
}

impl PageController {
    pub fn new(config: BrowseConfig) -> Self {
        let config = config.normalized();
        Self {
            page_index: config.initial_page,
            page_size: config.page_size,
            loaded: None,
            visible: Vec::new(),
            loading: false,
            last_error: None,
            next_seq: 0,
            pending_seq: None,
        }
    }

    /// Requested page index (may differ from the loaded one while loading).
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total item count reported by the last applied fetch.
    pub fn total_count(&self) -> u64 {
        self.loaded.as_ref().map_or(0, |(_, page)| page.total_count)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.loaded.as_ref().map(|(_, page)| page)
    }

    /// Items of the loaded page, empty before the first applied fetch.
    pub fn items(&self) -> &[Item] {
        self.current_page()
            .map(|page| page.items.as_slice())
            .unwrap_or_default()
    }

    pub fn visible_selection(&self) -> &[Item] {
        &self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Issues a ticket for the currently requested page (initial load or reload).
    pub fn request_current(&mut self) -> FetchTicket {
        let request = PageRequest::new(self.page_index, self.page_size);
        self.next_seq += 1;
        self.pending_seq = Some(self.next_seq);
        self.loading = true;
        debug!(
            "event=page_request module=controller status=start seq={} page={} size={}",
            self.next_seq, request.page_index, request.page_size
        );
        FetchTicket {
            seq: self.next_seq,
            request,
        }
    }

    /// Navigates to `page_index`, superseding any in-flight request.
    pub fn set_page_index(&mut self, page_index: u32) -> FetchTicket {
        self.page_index = normalize_page_index(page_index);
        self.request_current()
    }

    /// Changes the page size and restarts at page 1.
    pub fn set_page_size(&mut self, page_size: u32) -> FetchTicket {
        self.page_size = normalize_page_size(Some(page_size));
        self.page_index = 1;
        self.request_current()
    }

    /// Delivers the result for `ticket`.
    ///
    /// Completions for superseded tickets return `Ok(FetchOutcome::Stale)`
    /// without touching any state, including their failures.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: FetchResult<Page>,
        store: &SelectionStore,
    ) -> Result<FetchOutcome, FetchFailure> {
        if self.pending_seq != Some(ticket.seq) {
            debug!(
                "event=page_fetch module=controller status=stale seq={} page={}",
                ticket.seq, ticket.request.page_index
            );
            return Ok(FetchOutcome::Stale);
        }
        self.pending_seq = None;
        self.loading = false;

        match result {
            Ok(page) => {
                info!(
                    "event=page_fetch module=controller status=ok seq={} page={} items={} total={}",
                    ticket.seq,
                    ticket.request.page_index,
                    page.items.len(),
                    page.total_count
                );
                self.loaded = Some((ticket.request, page));
                self.last_error = None;
                self.refresh_visible(store);
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                warn!(
                    "event=page_fetch module=controller status=error seq={} page={} error={}",
                    ticket.seq, ticket.request.page_index, err
                );
                if let Some((request, _)) = &self.loaded {
                    self.page_index = request.page_index;
                    self.page_size = request.page_size;
                }
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Merges the widget's checked subset of the loaded page into `store`.
    pub fn reconcile(&mut self, store: &mut SelectionStore, checked_subset: &[Item]) {
        store.reconcile(self.items(), checked_subset);
        self.refresh_visible(store);
    }

    /// Re-derives the visible selection from `store`.
    pub fn refresh_visible(&mut self, store: &SelectionStore) {
        self.visible = store.visible_selection(self.items());
    }
}
