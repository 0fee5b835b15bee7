//! Authentication handler.

use axum::Json;
use axum::extract::{Form, State};

use crate::dto::request::AuthenticateRequest;
use crate::dto::response::{ApiResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    Form(req): Form<AuthenticateRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let token = state
        .account_service
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    })))
}
