//! Todo repository trait.

use crate::error::StoreResult;
use async_trait::async_trait;
use docket_core::{NewTodo, Todo, TodoPatch};

/// Repository for the `todos` collection.
///
/// Reads attach the owner through a left-outer join on `owner_id`: a todo
/// whose owner does not resolve is still returned, with an empty owner.
/// Writes against an id that does not exist succeed without effect.
#[async_trait]
pub trait TodoRepo: Send + Sync {
    /// List all todos with owners attached, newest `created_at` first.
    async fn list_todos(&self) -> StoreResult<Vec<Todo>>;

    /// Get a todo by ID with its owner attached, or `StoreError::NotFound`.
    async fn get_todo(&self, id: &str) -> StoreResult<Todo>;

    /// Create a todo with a generated ID and `created_at == updated_at == now`.
    /// The owner is not checked for existence.
    async fn create_todo(&self, todo: &NewTodo) -> StoreResult<Todo>;

    /// Replace title and completed, refreshing `updated_at`.
    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<()>;

    /// Delete a todo by ID.
    async fn delete_todo(&self, id: &str) -> StoreResult<()>;

    /// Mark a todo completed, refreshing `updated_at`. Idempotent.
    async fn mark_done(&self, id: &str) -> StoreResult<()>;
}
