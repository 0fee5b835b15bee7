//! User account handlers — registration, profile, password, removal.

use axum::Json;
use axum::extract::{Path, Query, State};

use userhub_auth::guard::enforce_match;

use crate::dto::request::{PasswordParams, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse, RemovedUserResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /users/
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let profile = state
        .account_service
        .register(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(profile))))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    enforce_match(current_user.id, user_id, "profile")?;

    let profile = state.account_service.profile(user_id).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(profile))))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<RemovedUserResponse>>, ApiError> {
    enforce_match(current_user.id, user_id, "profile")?;

    let removed = state.account_service.remove(user_id).await?;

    Ok(Json(ApiResponse::ok(RemovedUserResponse {
        username: removed.username,
        id: removed.id,
    })))
}

/// PUT /users/{user_id}/password
pub async fn change_password(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
    Query(params): Query<PasswordParams>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    enforce_match(current_user.id, user_id, "password")?;

    state
        .account_service
        .change_password(user_id, &params.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed successfully".to_string(),
    })))
}
