//! `CurrentUser` extractor — pulls the bearer token from the
//! Authorization header and resolves it to a stored user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use userhub_core::error::AppError;
use userhub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user, available to any handler that lists it.
///
/// A missing or malformed `Authorization` header is rejected before the
/// token is even looked at; token validation failures carry their own
/// uniform message.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Returns the resolved user row.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let user = state.guard.resolve(token).await?;

        Ok(CurrentUser(user))
    }
}
