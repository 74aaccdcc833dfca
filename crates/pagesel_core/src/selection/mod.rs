//! Cross-page selection.
//!
//! # Responsibility
//! - Own the selection that survives page navigation (`SelectionStore`).
//! - Validate bulk-select input and assemble multi-page prefixes.
//! - Project the selection for the drawer.
//!
//! # Invariants
//! - The store never performs I/O; fetching stays in `bulk` and the controller.

pub mod bulk;
pub mod drawer;
pub mod store;
