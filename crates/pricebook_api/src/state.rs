//! Shared application state for request handlers.
//!
//! # Responsibility
//! - Carry the storage service into handlers via axum `State`.
//!
//! # Invariants
//! - Handlers reach storage only through this state; no other shared
//!   mutable state exists in the process.

use pricebook_core::ItemService;
use std::sync::Arc;

/// State injected into every handler.
///
/// Cloning is cheap; the service itself is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

impl AppState {
    /// Wraps a ready storage service.
    pub fn new(items: ItemService) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}
