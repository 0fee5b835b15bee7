//! Root and health check handlers.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse, WelcomeResponse};

/// GET /
pub async fn welcome() -> Json<ApiResponse<WelcomeResponse>> {
    Json(ApiResponse::ok(WelcomeResponse {
        msg: "Welcome to UserHub".to_string(),
    }))
}

/// GET /health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
