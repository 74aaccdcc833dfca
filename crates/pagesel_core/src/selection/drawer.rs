//! Read-only projection of the selection for the selection drawer.

use crate::model::item::{Item, ItemId};
use crate::selection::store::SelectionStore;
use serde::{Deserialize, Serialize};

/// One row of the selection drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerEntry {
    pub id: ItemId,
    pub title: String,
    pub artist: Option<String>,
    pub date: Option<String>,
}

impl From<&Item> for DrawerEntry {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            artist: item.artist_display.clone(),
            date: item.date_label(),
        }
    }
}

/// Materialized drawer contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerView {
    pub entries: Vec<DrawerEntry>,
}

impl DrawerView {
    pub fn from_store(store: &SelectionStore) -> Self {
        Self {
            entries: store.iter().map(DrawerEntry::from).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Formats one line per entry, e.g. `#12 Nighthawks by Edward Hopper (1942)`.
    pub fn render_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                let mut line = format!("#{} {}", entry.id, entry.title);
                if let Some(artist) = entry.artist.as_deref() {
                    line.push_str(" by ");
                    line.push_str(artist);
                }
                if let Some(date) = entry.date.as_deref() {
                    line.push_str(&format!(" ({date})"));
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DrawerView;
    use crate::model::item::Item;
    use crate::selection::store::SelectionStore;

    #[test]
    fn render_lines_include_optional_fields_when_present() {
        let mut hopper = Item::new(12, "Nighthawks");
        hopper.artist_display = Some("Edward Hopper".to_string());
        hopper.date_start = Some(1942);
        hopper.date_end = Some(1942);
        let untitled = Item::new(13, "Untitled");

        let mut store = SelectionStore::new();
        store.bulk_select_first_n(&[hopper, untitled]);

        let view = DrawerView::from_store(&store);
        assert_eq!(view.count(), 2);
        assert_eq!(
            view.render_lines(),
            vec![
                "#12 Nighthawks by Edward Hopper (1942)".to_string(),
                "#13 Untitled".to_string(),
            ]
        );
    }

    #[test]
    fn empty_store_renders_nothing() {
        let view = DrawerView::from_store(&SelectionStore::new());
        assert_eq!(view.count(), 0);
        assert!(view.render_lines().is_empty());
    }
}
