//! HTTP API server for the docket todo service.
//!
//! Exposes owners and todos as JSON resources under `/api/v1`, backed by a
//! shared `DocumentStore`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

use anyhow::{Context, Result};
use docket_core::config::AppConfig;
use docket_store::DocumentStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind the configured address and serve the API until the process exits.
pub async fn serve(config: AppConfig, store: Arc<dyn DocumentStore>) -> Result<()> {
    let state = AppState::new(config, store);
    let addr: SocketAddr = state
        .config
        .server
        .bind
        .parse()
        .context("invalid bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    serve_with_listener(listener, state).await
}

/// Serve the API on an already bound listener.
pub async fn serve_with_listener(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%addr, backend = state.store.backend(), "Listening");

    axum::serve(listener, create_router(state))
        .await
        .context("server error")?;
    Ok(())
}
