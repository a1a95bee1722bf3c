//! Domain model for the item catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one persisted shape plus one request-body shape, nothing more.
//!
//! # Invariants
//! - Every persisted item is identified by a stable `ItemId`.
//! - Deletion is a hard delete; ids are still never reused.

pub mod item;
