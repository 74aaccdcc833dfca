//! Domain model for paginated browsing.
//!
//! # Responsibility
//! - Define the item record fetched from a page source.
//! - Define page request/response envelopes shared by sources and controller.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - The core never mutates fetched items; it only stores snapshots.

pub mod item;
pub mod page;
