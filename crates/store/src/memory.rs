//! In-process document store.
//!
//! Mirrors the semantics of the MongoDB store: caller-keyed owners, generated
//! todo ids, left-outer owner join on read and silent no-ops for writes
//! against unknown ids. Used for tests and for running without a database.

use crate::error::{StoreError, StoreResult};
use crate::queries;
use crate::repos::{OwnerRepo, TodoRepo};
use crate::store::DocumentStore;
use async_trait::async_trait;
use docket_core::{NewTodo, Owner, Todo, TodoPatch};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    owners: RwLock<Vec<Owner>>,
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the owner matching `owner_id`, or the empty owner.
    fn join_owner(owners: &[Owner], todo: &Todo) -> Todo {
        let owner = owners
            .iter()
            .find(|o| o.id == todo.owner_id)
            .cloned()
            .unwrap_or_default();
        Todo {
            owner,
            ..todo.clone()
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl OwnerRepo for MemoryStore {
    async fn list_owners(&self) -> StoreResult<Vec<Owner>> {
        Ok(self.owners.read().await.clone())
    }

    async fn get_owner(&self, id: &str) -> StoreResult<Owner> {
        self.owners
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("owner {id}")))
    }

    async fn create_owner(&self, owner: &Owner) -> StoreResult<()> {
        let mut owners = self.owners.write().await;
        if owners.iter().any(|o| o.id == owner.id) {
            return Err(StoreError::AlreadyExists(format!("owner {}", owner.id)));
        }
        owners.push(owner.clone());
        tracing::debug!(owner_id = %owner.id, "Owner created");
        Ok(())
    }

    async fn update_owner(&self, owner: &Owner) -> StoreResult<()> {
        let mut owners = self.owners.write().await;
        match owners.iter_mut().find(|o| o.id == owner.id) {
            Some(existing) => existing.name = owner.name.clone(),
            None => tracing::debug!(owner_id = %owner.id, "Owner update matched no document"),
        }
        Ok(())
    }

    async fn delete_owner(&self, id: &str) -> StoreResult<()> {
        self.owners.write().await.retain(|o| o.id != id);
        Ok(())
    }
}

#[async_trait]
impl TodoRepo for MemoryStore {
    async fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        let owners = self.owners.read().await;
        let todos = self.todos.read().await;
        let mut joined: Vec<Todo> = todos
            .iter()
            .map(|t| Self::join_owner(&owners, t))
            .collect();
        // Stable, so equal timestamps keep insertion order.
        joined.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(joined)
    }

    async fn get_todo(&self, id: &str) -> StoreResult<Todo> {
        let owners = self.owners.read().await;
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|t| t.id == id)
            .map(|t| Self::join_owner(&owners, t))
            .ok_or_else(|| StoreError::NotFound(format!("todo {id}")))
    }

    async fn create_todo(&self, todo: &NewTodo) -> StoreResult<Todo> {
        let now = queries::now();
        let created = Todo {
            id: docket_core::generate_id(),
            title: todo.title.clone(),
            completed: todo.completed,
            created_at: now,
            updated_at: now,
            owner_id: todo.owner_id.clone(),
            owner: Owner::default(),
        };

        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id == created.id) {
            return Err(StoreError::AlreadyExists(format!("todo {}", created.id)));
        }
        todos.push(created.clone());
        tracing::debug!(todo_id = %created.id, owner_id = %created.owner_id, "Todo created");
        Ok(created)
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
            todo.title = patch.title.clone();
            todo.completed = patch.completed;
            todo.updated_at = queries::now();
        }
        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> StoreResult<()> {
        self.todos.write().await.retain(|t| t.id != id);
        Ok(())
    }

    async fn mark_done(&self, id: &str) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
            todo.completed = true;
            todo.updated_at = queries::now();
        }
        Ok(())
    }
}
