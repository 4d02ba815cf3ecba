//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/v1/health", get(handlers::health_check))
        // Owners
        .route(
            "/v1/owners",
            get(handlers::list_owners).post(handlers::create_owner),
        )
        .route(
            "/v1/owners/{id}",
            get(handlers::get_owner)
                .put(handlers::update_owner)
                .delete(handlers::delete_owner),
        )
        // Todos
        .route("/v1/todos", get(handlers::list_todos))
        .route("/v1/owners/{owner_id}/todos", post(handlers::create_todo))
        .route(
            "/v1/owners/{owner_id}/todos/{todo_id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
