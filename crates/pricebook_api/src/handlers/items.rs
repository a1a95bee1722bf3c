//! CRUD handlers for the `/items` routes.
//!
//! # Responsibility
//! - Bind requests, call the storage service, shape responses.
//!
//! # Invariants
//! - An unparseable path id behaves exactly like an absent one (404).
//! - Update checks existence before reading the body, so a missing id wins
//!   over a malformed body.
//! - Success bodies are JSON except delete, which answers plain text.

use crate::error::ApiError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pricebook_core::{Item, ItemId, ItemInput};

/// Handles `POST /items`: creates an item from the JSON body.
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input = decode_input(&body)?;
    let created = state.items.create_item(&input)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handles `GET /items`: lists every item.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list_items()?;
    Ok(Json(items))
}

/// Handles `GET /items/{id}`: fetches one item.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    let item = state.items.get_item(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(item))
}

/// Handles `PUT /items/{id}`: replaces name and price of one item.
///
/// Existence is checked before the body is decoded: a request against a
/// missing id answers 404 even when its body would also fail decoding. If
/// the row disappears between the check and the write, the write itself
/// reports not-found.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    state.items.get_item(id)?.ok_or(ApiError::NotFound)?;

    let input = decode_input(&body)?;
    let updated = state.items.update_item(id, &input)?;
    Ok(Json(updated))
}

/// Handles `DELETE /items/{id}`: removes one item.
///
/// The delete statement itself is the existence check; deleting the same id
/// twice answers 404 on the second call.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_item_id(&id)?;
    state.items.delete_item(id)?;
    Ok("Item deleted")
}

// The id is bound as text and parsed here so `/items/abc` answers 404 like
// a missing row instead of a binding error.
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>().map_err(|_| ApiError::NotFound)
}

fn decode_input(body: &[u8]) -> Result<ItemInput, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}
