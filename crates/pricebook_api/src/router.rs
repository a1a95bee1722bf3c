//! Route table assembly.
//!
//! # Responsibility
//! - Wire the five item routes onto their handler functions.

use crate::handlers::items;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

/// Builds the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .with_state(state)
}
