//! Item use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport callers.
//! - Own the shared SQLite connection and hand per-call repositories a
//!   borrowed view of it.
//!
//! # Invariants
//! - Every storage call runs under the connection mutex; callers never see
//!   the connection directly.
//! - Service APIs return repository errors unchanged.

use crate::db::{self, DbResult};
use crate::model::item::{Item, ItemId, ItemInput};
use crate::repo::item_repo::{ItemRepository, RepoResult, SqliteItemRepository};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Thread-safe use-case facade over item persistence.
///
/// A `rusqlite::Connection` is not `Sync`, so the service owns it behind a
/// mutex and serializes storage calls. Each method locks, builds a
/// short-lived repository over the borrowed connection and delegates.
pub struct ItemService {
    conn: Mutex<Connection>,
}

impl ItemService {
    /// Creates a service owning the provided ready connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Opens (or creates) the database file at `path` and wraps it.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(db::open_db(path)?))
    }

    /// Opens a fresh in-memory database; primarily for tests.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(db::open_db_in_memory()?))
    }

    /// Creates a new item and returns it with its storage-assigned id.
    pub fn create_item(&self, input: &ItemInput) -> RepoResult<Item> {
        let conn = self.lock_conn();
        SqliteItemRepository::new(&conn).create_item(input)
    }

    /// Replaces name and price of an existing item.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_item(&self, id: ItemId, input: &ItemInput) -> RepoResult<Item> {
        let conn = self.lock_conn();
        SqliteItemRepository::new(&conn).update_item(id, input)
    }

    /// Gets one item by id.
    pub fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let conn = self.lock_conn();
        SqliteItemRepository::new(&conn).get_item(id)
    }

    /// Lists all items ordered by ascending id.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        let conn = self.lock_conn();
        SqliteItemRepository::new(&conn).list_items()
    }

    /// Removes one item by id.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let conn = self.lock_conn();
        SqliteItemRepository::new(&conn).delete_item(id)
    }

    // Statements run in autocommit mode; a poisoned guard holds no partial
    // write, so the guard is taken over instead of propagating the panic.
    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
