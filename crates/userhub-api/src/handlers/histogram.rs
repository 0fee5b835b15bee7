//! Histogram handlers. Both aggregate over all users' actions, so they
//! require authentication but no actor/target match.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};

use userhub_core::types::Window;
use userhub_service::audit;
use userhub_service::histogram::PeriodEntry;

use crate::dto::request::PeriodParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /users/histogram-types
pub async fn types_histogram(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<ApiResponse<BTreeMap<String, i64>>>, ApiError> {
    let histogram = state.histogram_service.type_histogram().await?;

    state
        .audit_service
        .record(current_user.id, audit::QUERIED_TYPES_HISTOGRAM)
        .await?;

    Ok(Json(ApiResponse::ok(histogram)))
}

/// GET /users/histogram-period
pub async fn period_histogram(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(params): Query<PeriodParams>,
) -> Result<Json<ApiResponse<BTreeMap<String, PeriodEntry>>>, ApiError> {
    // Absent means the default one-day window; an explicit empty string
    // disables windowing.
    let window = match params.period_time.as_deref() {
        None => Some(Window::Day),
        Some("") => None,
        Some(value) => Some(value.parse()?),
    };

    let histogram = state.histogram_service.period_histogram(window).await?;

    state
        .audit_service
        .record(current_user.id, audit::QUERIED_PERIODS_HISTOGRAM)
        .await?;

    Ok(Json(ApiResponse::ok(histogram)))
}
