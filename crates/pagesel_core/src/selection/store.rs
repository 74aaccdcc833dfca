//! Cross-page selection store.
//!
//! # Responsibility
//! - Keep selected items keyed by `ItemId`, independent of the loaded page.
//! - Merge one page's checked subset into the global selection.
//! - Answer page-scoped and global selection queries.
//!
//! # Invariants
//! - `reconcile` only adds or removes ids present on the given page.
//! - `bulk_select_first_n` never removes an entry.
//! - Every stored item is a snapshot of that item as last seen on a page.
//! - No operation fails; malformed input is a per-element no-op.

use crate::model::item::{Item, ItemId};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashSet;

/// Selection that survives page navigation.
///
/// Iteration order is insertion order. Updating an already selected id keeps
/// its position.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selected: IndexMap<ItemId, Item>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains_key(&id)
    }

    /// Returns the items of `current_page` that are selected, in page order.
    pub fn visible_selection(&self, current_page: &[Item]) -> Vec<Item> {
        current_page
            .iter()
            .filter(|item| self.selected.contains_key(&item.id))
            .cloned()
            .collect()
    }

    /// Merges the widget-reported checked subset of `current_page`.
    ///
    /// Entries for ids not on `current_page` are left untouched, so unchecking
    /// never happens implicitly for other pages. Checked items that are not on
    /// `current_page` are ignored.
    pub fn reconcile(&mut self, current_page: &[Item], checked_subset: &[Item]) {
        let page_ids: HashSet<ItemId> = current_page.iter().map(|item| item.id).collect();
        let checked_ids: HashSet<ItemId> = checked_subset
            .iter()
            .map(|item| item.id)
            .filter(|id| page_ids.contains(id))
            .collect();

        let added = self.add_checked(checked_subset, &page_ids);
        let removed = self.remove_unchecked(current_page, &checked_ids);

        debug!(
            "event=selection_reconcile module=selection status=ok page_len={} checked={} added={} removed={} total={}",
            current_page.len(),
            checked_ids.len(),
            added,
            removed,
            self.selected.len()
        );
    }

    /// Unions the first-N prefix of the dataset into the selection.
    ///
    /// `dataset_prefix` must be the genuine first N items in canonical order;
    /// when N exceeds one page the caller assembles it from several fetches.
    /// The prefix is inserted as given and existing entries are preserved.
    pub fn bulk_select_first_n(&mut self, dataset_prefix: &[Item]) {
        let before = self.selected.len();
        for item in dataset_prefix {
            self.selected.insert(item.id, item.clone());
        }

        debug!(
            "event=selection_bulk_select module=selection status=ok prefix_len={} added={} total={}",
            dataset_prefix.len(),
            self.selected.len() - before,
            self.selected.len()
        );
    }

    pub fn clear(&mut self) {
        let cleared = self.selected.len();
        self.selected.clear();
        debug!("event=selection_clear module=selection status=ok cleared={cleared}");
    }

    /// Returns every selected item in insertion order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.selected.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.selected.values()
    }

    // Add pass: the loaded copy replaces any older snapshot for the same id.
    fn add_checked(&mut self, checked_subset: &[Item], page_ids: &HashSet<ItemId>) -> usize {
        let mut added = 0;
        for item in checked_subset {
            if !page_ids.contains(&item.id) {
                continue;
            }
            if self.selected.insert(item.id, item.clone()).is_none() {
                added += 1;
            }
        }
        added
    }

    // Remove pass: current page minus checked subset.
    fn remove_unchecked(&mut self, current_page: &[Item], checked_ids: &HashSet<ItemId>) -> usize {
        let mut removed = 0;
        for item in current_page {
            if checked_ids.contains(&item.id) {
                continue;
            }
            if self.selected.shift_remove(&item.id).is_some() {
                removed += 1;
            }
        }
        removed
    }
}
