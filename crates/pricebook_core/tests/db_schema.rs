use pricebook_core::db::{open_db, open_db_in_memory, DbError};
use pricebook_core::{ItemInput, ItemRepository, SqliteItemRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_items_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "items");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.db");

    let conn_first = open_db(&path).unwrap();
    assert_table_exists(&conn_first, "items");
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_table_exists(&conn_second, "items");
}

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.db");

    let conn = open_db(&path).unwrap();
    let created = SqliteItemRepository::new(&conn)
        .create_item(&ItemInput::new("persisted", 10))
        .unwrap();
    drop(conn);

    let reopened = open_db(&path).unwrap();
    let loaded = SqliteItemRepository::new(&reopened)
        .get_item(created.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn opening_file_with_incompatible_items_table_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE items (
            id INTEGER PRIMARY KEY,
            label TEXT NOT NULL
        );",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::MissingColumn { table, column } => {
            assert_eq!(table, "items");
            assert_eq!(column, "name");
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
