//! Owner handlers.

use super::read_json;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use docket_core::{Owner, generate_id};
use serde::Deserialize;

/// Body of `PUT /v1/owners/{id}`. The id comes from the path.
#[derive(Debug, Deserialize)]
pub struct UpdateOwnerRequest {
    #[serde(default)]
    pub name: String,
}

/// GET /v1/owners - List all owners.
pub async fn list_owners(State(state): State<AppState>) -> ApiResult<Json<Vec<Owner>>> {
    Ok(Json(state.store.list_owners().await?))
}

/// POST /v1/owners - Create an owner.
///
/// The id is taken from the body; an empty or missing id gets a generated one.
pub async fn create_owner(
    State(state): State<AppState>,
    req: Request,
) -> ApiResult<(StatusCode, Json<Owner>)> {
    let mut owner: Owner = read_json(req).await?;
    if owner.id.is_empty() {
        owner.id = generate_id();
    }

    state.store.create_owner(&owner).await?;
    tracing::info!(owner_id = %owner.id, "Owner created");

    Ok((StatusCode::CREATED, Json(owner)))
}

/// GET /v1/owners/{id} - Get one owner.
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Owner>> {
    Ok(Json(state.store.get_owner(&id).await?))
}

/// PUT /v1/owners/{id} - Replace an owner's name. Unknown ids succeed silently.
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Request,
) -> ApiResult<StatusCode> {
    let body: UpdateOwnerRequest = read_json(req).await?;
    state.store.update_owner(&Owner::new(id, body.name)).await?;
    Ok(StatusCode::OK)
}

/// DELETE /v1/owners/{id} - Delete an owner. Its todos are kept.
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_owner(&id).await?;
    tracing::info!(owner_id = %id, "Owner deleted");
    Ok(StatusCode::OK)
}
