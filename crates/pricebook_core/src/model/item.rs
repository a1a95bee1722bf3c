//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record and the typed request body.
//! - Keep request-body decoding strongly typed instead of binding into
//!   free-form JSON.
//!
//! # Invariants
//! - `id` is assigned by storage, never by callers, and never reused after
//!   deletion.
//! - `name` and `price` carry no semantic constraints: empty names and
//!   negative prices are valid values.

use serde::{Deserialize, Serialize};

/// Stable storage-assigned identifier for an [`Item`].
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// Canonical persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Primary key assigned by storage on insert.
    pub id: ItemId,
    /// Free-form display name.
    pub name: String,
    /// Unit price. Sign and magnitude are intentionally unchecked.
    pub price: i64,
}

/// Typed request body shared by the create and update operations.
///
/// Both fields are required: a body missing either one fails decoding
/// instead of silently keeping a prior value. An `id` field in the body is
/// ignored, as are unknown extra fields. Storage assigns ids on create and
/// preserves them on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    /// Free-form display name.
    pub name: String,
    /// Unit price. Sign and magnitude are intentionally unchecked.
    pub price: i64,
}

impl Item {
    /// Builds the persisted shape from an accepted request body.
    ///
    /// Used by repository writes once storage has decided the id.
    pub fn from_input(id: ItemId, input: &ItemInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            price: input.price,
        }
    }
}

impl ItemInput {
    /// Convenience constructor for callers building requests in code.
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
