//! Items table creation and shape verification.
//!
//! # Responsibility
//! - Create the `items` table on first open.
//! - Verify that a pre-existing file carries the expected columns.
//!
//! # Invariants
//! - `items.id` uses AUTOINCREMENT, so ids of deleted rows are never
//!   reassigned to later inserts.
//! - `ensure_schema` is idempotent and safe to run on every open.

use super::{DbError, DbResult};
use rusqlite::Connection;

const ITEMS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price INTEGER NOT NULL
);";

/// Creates the `items` table if missing and verifies its columns.
///
/// A database file created by an older or foreign schema fails here with
/// [`DbError::MissingColumn`] instead of failing later inside a query.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(ITEMS_SCHEMA)?;

    for column in ["id", "name", "price"] {
        if !table_has_column(conn, "items", column)? {
            return Err(DbError::MissingColumn {
                table: "items",
                column,
            });
        }
    }

    Ok(())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
