//! Todo handlers.
//!
//! Todos are nested under their owner for create; reads and writes on a
//! single todo address it by todo id alone.

use super::read_json;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use docket_core::{NewTodo, Todo, TodoPatch};
use serde::Deserialize;

/// Body of `POST /v1/owners/{owner_id}/todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// GET /v1/todos - List all todos with their owners, newest first.
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(state.store.list_todos().await?))
}

/// POST /v1/owners/{owner_id}/todos - Create a todo for an owner.
///
/// The owner is not required to exist.
pub async fn create_todo(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    req: Request,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let body: CreateTodoRequest = read_json(req).await?;
    let new_todo = NewTodo {
        title: body.title,
        completed: body.completed,
        owner_id,
    };

    let todo = state.store.create_todo(&new_todo).await?;
    tracing::info!(todo_id = %todo.id, owner_id = %todo.owner_id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /v1/owners/{owner_id}/todos/{todo_id} - Get one todo with its owner.
pub async fn get_todo(
    State(state): State<AppState>,
    Path((_owner_id, todo_id)): Path<(String, String)>,
) -> ApiResult<Json<Todo>> {
    Ok(Json(state.store.get_todo(&todo_id).await?))
}

/// PUT /v1/owners/{owner_id}/todos/{todo_id} - Replace title and completed.
pub async fn update_todo(
    State(state): State<AppState>,
    Path((_owner_id, todo_id)): Path<(String, String)>,
    req: Request,
) -> ApiResult<StatusCode> {
    let patch: TodoPatch = read_json(req).await?;
    state.store.update_todo(&todo_id, &patch).await?;
    Ok(StatusCode::OK)
}

/// DELETE /v1/owners/{owner_id}/todos/{todo_id} - Delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path((_owner_id, todo_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.store.delete_todo(&todo_id).await?;
    tracing::info!(todo_id = %todo_id, "Todo deleted");
    Ok(StatusCode::OK)
}
