//! Backend-agnostic repository scenarios.
//!
//! Each scenario takes a fresh store so the same assertions run against the
//! in-memory store and a MongoDB container.

#![allow(dead_code)]

use super::tick;
use docket_core::{NewTodo, Owner, TodoPatch};
use docket_store::{DocumentStore, StoreError};
use std::sync::Arc;
use time::OffsetDateTime;

pub async fn owner_crud(store: Arc<dyn DocumentStore>) {
    assert!(store.list_owners().await.unwrap().is_empty());

    store.create_owner(&Owner::new("u1", "Alice")).await.unwrap();
    store.create_owner(&Owner::new("u2", "Bob")).await.unwrap();

    let owners = store.list_owners().await.unwrap();
    assert_eq!(owners.len(), 2);
    assert!(owners.contains(&Owner::new("u1", "Alice")));
    assert!(owners.contains(&Owner::new("u2", "Bob")));

    store.update_owner(&Owner::new("u1", "Alicia")).await.unwrap();
    assert_eq!(store.get_owner("u1").await.unwrap().name, "Alicia");

    store.delete_owner("u2").await.unwrap();
    let err = store.get_owner("u2").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

pub async fn owner_duplicate_id(store: Arc<dyn DocumentStore>) {
    store.create_owner(&Owner::new("u1", "Alice")).await.unwrap();
    let err = store
        .create_owner(&Owner::new("u1", "Impostor"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(_)));
    assert_eq!(store.get_owner("u1").await.unwrap().name, "Alice");
}

pub async fn owner_missing_id_writes_are_noops(store: Arc<dyn DocumentStore>) {
    store.update_owner(&Owner::new("ghost", "Nobody")).await.unwrap();
    store.delete_owner("ghost").await.unwrap();
    assert!(store.list_owners().await.unwrap().is_empty());
}

pub async fn todo_create_sets_timestamps(store: Arc<dyn DocumentStore>) {
    let todo = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&todo.id).is_ok());
    assert_eq!(todo.title, "buy milk");
    assert!(!todo.completed);
    assert_eq!(todo.owner_id, "u1");
    assert_eq!(todo.created_at, todo.updated_at);
    assert!(todo.created_at > OffsetDateTime::UNIX_EPOCH);

    let stored = store.get_todo(&todo.id).await.unwrap();
    assert_eq!(stored.created_at, todo.created_at);
    assert_eq!(stored.updated_at, todo.updated_at);
}

pub async fn todo_update_refreshes_updated_at(store: Arc<dyn DocumentStore>) {
    let todo = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();
    tick().await;

    let patch = TodoPatch {
        title: "buy oat milk".to_string(),
        completed: true,
    };
    store.update_todo(&todo.id, &patch).await.unwrap();

    let updated = store.get_todo(&todo.id).await.unwrap();
    assert_eq!(updated.title, "buy oat milk");
    assert!(updated.completed);
    assert_eq!(updated.owner_id, "u1");
    assert_eq!(updated.created_at, todo.created_at);
    assert!(updated.updated_at > updated.created_at);

    tick().await;
    store.update_todo(&todo.id, &patch).await.unwrap();
    let again = store.get_todo(&todo.id).await.unwrap();
    assert!(again.updated_at > updated.updated_at);
}

pub async fn todo_done_is_idempotent(store: Arc<dyn DocumentStore>) {
    let todo = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();
    tick().await;

    store.mark_done(&todo.id).await.unwrap();
    let first = store.get_todo(&todo.id).await.unwrap();
    assert!(first.completed);
    assert!(first.updated_at > todo.updated_at);

    tick().await;
    store.mark_done(&todo.id).await.unwrap();
    let second = store.get_todo(&todo.id).await.unwrap();
    assert!(second.completed);
}

pub async fn todo_list_is_left_outer_join(store: Arc<dyn DocumentStore>) {
    store.create_owner(&Owner::new("u1", "Alice")).await.unwrap();
    let owned = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();
    let orphan = store
        .create_todo(&NewTodo::new("walk dog", "nobody"))
        .await
        .unwrap();

    let todos = store.list_todos().await.unwrap();
    assert_eq!(todos.len(), 2);

    let owned = todos.iter().find(|t| t.id == owned.id).unwrap();
    assert_eq!(owned.owner, Owner::new("u1", "Alice"));

    let orphan = todos.iter().find(|t| t.id == orphan.id).unwrap();
    assert_eq!(orphan.owner_id, "nobody");
    assert!(orphan.owner.is_empty());

    // A missing owner never turns a single fetch into NotFound.
    let fetched = store.get_todo(&orphan.id).await.unwrap();
    assert!(fetched.owner.is_empty());
}

pub async fn todo_list_newest_first(store: Arc<dyn DocumentStore>) {
    let mut ids = Vec::new();
    for title in ["first", "second", "third"] {
        ids.push(store.create_todo(&NewTodo::new(title, "u1")).await.unwrap().id);
        tick().await;
    }

    let todos = store.list_todos().await.unwrap();
    let listed: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
    ids.reverse();
    assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(
        todos
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
}

pub async fn todo_missing_id(store: Arc<dyn DocumentStore>) {
    let err = store.get_todo("does-not-exist").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let patch = TodoPatch {
        title: "x".to_string(),
        completed: true,
    };
    store.update_todo("does-not-exist", &patch).await.unwrap();
    store.mark_done("does-not-exist").await.unwrap();
    store.delete_todo("does-not-exist").await.unwrap();
    assert!(store.list_todos().await.unwrap().is_empty());
}

pub async fn todo_delete(store: Arc<dyn DocumentStore>) {
    let todo = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();
    store.delete_todo(&todo.id).await.unwrap();
    assert!(matches!(
        store.get_todo(&todo.id).await,
        Err(StoreError::NotFound(_))
    ));
}

pub async fn deleting_owner_keeps_todos(store: Arc<dyn DocumentStore>) {
    store.create_owner(&Owner::new("u1", "Alice")).await.unwrap();
    let todo = store
        .create_todo(&NewTodo::new("buy milk", "u1"))
        .await
        .unwrap();

    store.delete_owner("u1").await.unwrap();

    let fetched = store.get_todo(&todo.id).await.unwrap();
    assert_eq!(fetched.owner_id, "u1");
    assert!(fetched.owner.is_empty());
}
