//! SQLite-backed page source.
//!
//! # Responsibility
//! - Serve pages of the `items` table in canonical display order.
//! - Load a dataset into storage for browsing.
//!
//! # Invariants
//! - Canonical order is `position ASC, id ASC`.
//! - Write paths call `Item::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::model::item::Item;
use crate::model::page::{Page, PageRequest};
use crate::source::{FetchFailure, FetchResult, PageSource};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    title,
    place_of_origin,
    artist_display,
    inscriptions,
    date_start,
    date_end
FROM items";

/// Page source reading the `items` table of a migrated connection.
pub struct SqliteItemSource<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemSource<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Appends items after the current last position, in slice order.
    ///
    /// Existing ids are replaced in place and keep their position.
    pub fn insert_items(&self, items: &[Item]) -> FetchResult<usize> {
        for item in items {
            item.validate()?;
        }

        let tx = self.conn.unchecked_transaction()?;
        let mut next_position: i64 = tx.query_row(
            "SELECT COALESCE(MAX(position), 0) + 1 FROM items;",
            [],
            |row| row.get(0),
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO items (
                    id,
                    position,
                    title,
                    place_of_origin,
                    artist_display,
                    inscriptions,
                    date_start,
                    date_end
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    place_of_origin = excluded.place_of_origin,
                    artist_display = excluded.artist_display,
                    inscriptions = excluded.inscriptions,
                    date_start = excluded.date_start,
                    date_end = excluded.date_end;",
            )?;
            for item in items {
                stmt.execute(params![
                    item.id,
                    next_position,
                    item.title.as_str(),
                    item.place_of_origin.as_deref(),
                    item.artist_display.as_deref(),
                    item.inscriptions.as_deref(),
                    item.date_start,
                    item.date_end,
                ])?;
                next_position += 1;
            }
        }
        tx.commit()?;

        debug!(
            "event=items_insert module=source status=ok count={}",
            items.len()
        );
        Ok(items.len())
    }

    pub fn count_items(&self) -> FetchResult<u64> {
        count_items_on(self.conn)
    }
}

impl PageSource for SqliteItemSource<'_> {
    fn fetch_page(&self, request: &PageRequest) -> FetchResult<Page> {
        let offset = i64::try_from(request.offset()).map_err(|_| {
            FetchFailure::Source(format!("page {} offset overflows", request.page_index))
        })?;

        // Rows and total come from one read transaction so they agree.
        let tx = self.conn.unchecked_transaction()?;
        let mut items = Vec::new();
        {
            let mut stmt = tx.prepare(&format!(
                "{ITEM_SELECT_SQL}
                 ORDER BY position ASC, id ASC
                 LIMIT ?1 OFFSET ?2;"
            ))?;
            let mut rows = stmt.query(params![i64::from(request.page_size), offset])?;
            while let Some(row) = rows.next()? {
                items.push(parse_item_row(row)?);
            }
        }
        let total_count = count_items_on(&tx)?;
        tx.commit()?;

        Ok(Page {
            page_index: request.page_index,
            items,
            total_count,
        })
    }
}

fn count_items_on(conn: &Connection) -> FetchResult<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?;
    u64::try_from(count)
        .map_err(|_| FetchFailure::InvalidData(format!("negative item count {count}")))
}

fn parse_item_row(row: &Row<'_>) -> FetchResult<Item> {
    let item = Item {
        id: row.get("id")?,
        title: row.get("title")?,
        place_of_origin: row.get("place_of_origin")?,
        artist_display: row.get("artist_display")?,
        inscriptions: row.get("inscriptions")?,
        date_start: row.get("date_start")?,
        date_end: row.get("date_end")?,
    };
    if let Err(err) = item.validate() {
        warn!(
            "event=item_parse module=source status=error id={} error={}",
            item.id, err
        );
        return Err(err.into());
    }
    Ok(item)
}
