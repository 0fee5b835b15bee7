//! Route definitions for the UserHub HTTP API.
//!
//! Routes are organized by domain and mounted at the root. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(root_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Root and health endpoints (no auth required)
fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::welcome))
        .route("/health", get(handlers::health::health))
}

/// Login endpoint
fn auth_routes() -> Router<AppState> {
    Router::new().route("/authenticate", post(handlers::auth::authenticate))
}

/// User accounts, their action ledgers, and the all-user histograms.
///
/// The static `histogram-*` segments are registered alongside the
/// `{user_id}` capture; static segments win the match.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(handlers::user::register))
        .route(
            "/users/histogram-types",
            get(handlers::histogram::types_histogram),
        )
        .route(
            "/users/histogram-period",
            get(handlers::histogram::period_histogram),
        )
        .route("/users/{user_id}", get(handlers::user::get_user))
        .route("/users/{user_id}", delete(handlers::user::delete_user))
        .route(
            "/users/{user_id}/password",
            put(handlers::user::change_password),
        )
        .route(
            "/users/{user_id}/actions",
            get(handlers::action::list_actions),
        )
        .route(
            "/users/{user_id}/last_actions",
            get(handlers::action::last_actions),
        )
}
