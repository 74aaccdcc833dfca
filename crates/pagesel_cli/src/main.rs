//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `pagesel_core` linkage.
//! - Run a short scripted browse session over an in-memory SQLite dataset.
//!
//! Set `PAGESEL_LOG_DIR` to an absolute path to enable file logging.

use pagesel_core::db::open_db_in_memory;
use pagesel_core::{
    default_log_level, init_logging, BrowseConfig, BrowseEvent, BrowseSession, Item,
    SqliteItemSource,
};
use std::error::Error;

const DEMO_ITEM_COUNT: i64 = 25;

fn main() -> Result<(), Box<dyn Error>> {
    println!("pagesel_core ping={}", pagesel_core::ping());
    println!("pagesel_core version={}", pagesel_core::core_version());

    if let Ok(log_dir) = std::env::var("PAGESEL_LOG_DIR") {
        init_logging(default_log_level().as_str(), &log_dir)?;
    }

    let conn = open_db_in_memory()?;
    let source = SqliteItemSource::new(&conn);
    source.insert_items(&demo_items())?;

    let mut session = BrowseSession::new(source, BrowseConfig::default());
    session.start()?;

    let first_three = session.controller().items()[..3].to_vec();
    session.dispatch(BrowseEvent::SelectionChanged(first_three))?;
    session.dispatch(BrowseEvent::PageIndexChanged(3))?;
    session.dispatch(BrowseEvent::BulkSelectSubmitted("12".to_string()))?;

    if let Err(err) = session.dispatch(BrowseEvent::BulkSelectSubmitted("none".to_string())) {
        println!("rejected bulk input: {err}");
    }

    let controller = session.controller();
    println!(
        "page={} size={} total={} visible_selected={}",
        controller.page_index(),
        controller.page_size(),
        controller.total_count(),
        controller.visible_selection().len()
    );

    let drawer = session.drawer();
    println!("selected={}", drawer.count());
    for line in drawer.render_lines() {
        println!("  {line}");
    }
    Ok(())
}

fn demo_items() -> Vec<Item> {
    (1..=DEMO_ITEM_COUNT)
        .map(|id| {
            let mut item = Item::new(id, format!("Study No. {id}"));
            item.artist_display = Some(format!("Workshop {}", (id % 3) + 1));
            item.place_of_origin = Some("Netherlands".to_string());
            item.date_start = Some(1600 + id as i32);
            item.date_end = Some(1602 + id as i32);
            item
        })
        .collect()
}
