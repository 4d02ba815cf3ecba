//! HTTP request handlers.

pub mod health;
pub mod owners;
pub mod todos;

pub use health::*;
pub use owners::*;
pub use todos::*;

use crate::error::{ApiError, ApiResult};
use axum::extract::Request;
use serde::de::DeserializeOwned;

/// Maximum JSON request body size.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Read the request body and decode it as JSON. Any failure is a bad request.
pub(crate) async fn read_json<T: DeserializeOwned>(req: Request) -> ApiResult<T> {
    let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read body: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(format!("invalid JSON: {e}")))
}
