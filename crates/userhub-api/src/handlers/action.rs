//! Action ledger handlers.
//!
//! Read endpoints compute their result before recording the query
//! action, so a response never contains the action describing its own
//! query.

use axum::Json;
use axum::extract::{Path, Query, State};

use userhub_auth::guard::enforce_match;
use userhub_core::types::SortOrder;
use userhub_entity::action::Action;
use userhub_service::audit;

use crate::dto::request::ActionListParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /users/{user_id}/actions
pub async fn list_actions(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
    Query(params): Query<ActionListParams>,
) -> Result<Json<ApiResponse<Vec<Action>>>, ApiError> {
    enforce_match(current_user.id, user_id, "actions")?;

    let order: SortOrder = params.sort.parse()?;
    let actions = state
        .audit_service
        .list(user_id, order, params.limit)
        .await?;

    state
        .audit_service
        .record(user_id, &audit::actions_query_title(order, params.limit))
        .await?;

    Ok(Json(ApiResponse::ok(actions)))
}

/// GET /users/{user_id}/last_actions
pub async fn last_actions(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Action>>>, ApiError> {
    enforce_match(current_user.id, user_id, "last actions")?;

    let actions = state.audit_service.latest_per_kind(user_id).await?;

    state
        .audit_service
        .record(user_id, audit::QUERIED_LAST_ACTIONS)
        .await?;

    Ok(Json(ApiResponse::ok(actions)))
}
