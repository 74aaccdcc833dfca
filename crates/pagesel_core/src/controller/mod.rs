//! Page navigation orchestration.
//!
//! # Responsibility
//! - Sequence page fetches and feed the selection store.
//! - Dispatch browse events on a single logical thread.
//!
//! # Invariants
//! - No handler runs concurrently with another; each completes its store
//!   mutation before the next event is processed.

pub mod page_controller;
pub mod session;
