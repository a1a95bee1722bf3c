use pricebook_core::db::open_db_in_memory;
use pricebook_core::{Item, ItemInput, ItemRepository, RepoError, SqliteItemRepository};
use std::collections::HashSet;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("tea", 42)).unwrap();
    assert_eq!(created.name, "tea");
    assert_eq!(created.price, 42);

    let loaded = repo.get_item(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_accepts_empty_name_and_negative_price() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("", -5)).unwrap();

    let loaded = repo.get_item(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "");
    assert_eq!(loaded.price, -5);
}

#[test]
fn ids_are_assigned_in_increasing_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let first = repo.create_item(&ItemInput::new("a", 1)).unwrap();
    let second = repo.create_item(&ItemInput::new("b", 2)).unwrap();
    let third = repo.create_item(&ItemInput::new("c", 3)).unwrap();

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[test]
fn list_returns_all_items_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let mut created = Vec::new();
    for index in 0..5 {
        created.push(
            repo.create_item(&ItemInput::new(format!("item-{index}"), index))
                .unwrap(),
        );
    }

    let listed = repo.list_items().unwrap();
    assert_eq!(listed, created);
}

#[test]
fn list_on_empty_database_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    assert!(repo.list_items().unwrap().is_empty());
}

#[test]
fn get_missing_item_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    assert!(repo.get_item(12345).unwrap().is_none());
}

#[test]
fn update_replaces_fields_and_preserves_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("draft", 100)).unwrap();

    let updated = repo
        .update_item(created.id, &ItemInput::new("final", 150))
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "final");
    assert_eq!(updated.price, 150);

    let loaded = repo.get_item(created.id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Item {
            id: created.id,
            name: "final".to_string(),
            price: 150,
        }
    );
}

#[test]
fn update_missing_item_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let err = repo
        .update_item(999, &ItemInput::new("ghost", 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn update_deleted_item_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("retired", 9)).unwrap();
    repo.delete_item(created.id).unwrap();

    let err = repo
        .update_item(created.id, &ItemInput::new("revived", 10))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
}

#[test]
fn delete_removes_item() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("short lived", 7)).unwrap();
    repo.delete_item(created.id).unwrap();

    assert!(repo.get_item(created.id).unwrap().is_none());
    assert!(repo.list_items().unwrap().is_empty());
}

#[test]
fn second_delete_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let created = repo.create_item(&ItemInput::new("once", 1)).unwrap();
    repo.delete_item(created.id).unwrap();

    let err = repo.delete_item(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
}

#[test]
fn deleted_ids_are_never_reassigned() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::new(&conn);

    let first = repo.create_item(&ItemInput::new("first", 1)).unwrap();
    let second = repo.create_item(&ItemInput::new("second", 2)).unwrap();
    repo.delete_item(second.id).unwrap();

    let third = repo.create_item(&ItemInput::new("third", 3)).unwrap();
    assert!(third.id > second.id);

    let ids: HashSet<_> = repo
        .list_items()
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, HashSet::from([first.id, third.id]));
}
