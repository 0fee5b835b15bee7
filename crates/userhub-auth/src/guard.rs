//! Request identity resolution and per-user access checks.

use std::sync::Arc;

use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_database::repositories::UserRepository;
use userhub_entity::user::User;

use crate::token::TokenDecoder;
use crate::token::decoder::CREDENTIALS_MESSAGE;

/// Resolves bearer tokens to stored users.
///
/// Token subjects are usernames, so the account is looked up on every
/// request. A token whose subject no longer exists is treated the same
/// as an invalid token.
#[derive(Debug, Clone)]
pub struct IdentityGuard {
    decoder: Arc<TokenDecoder>,
    user_repo: Arc<UserRepository>,
}

impl IdentityGuard {
    /// Creates a new guard.
    pub fn new(decoder: Arc<TokenDecoder>, user_repo: Arc<UserRepository>) -> Self {
        Self { decoder, user_repo }
    }

    /// Validates a token and loads the account it names.
    pub async fn resolve(&self, token: &str) -> AppResult<User> {
        let username = self.decoder.verify(token)?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::unauthorized(CREDENTIALS_MESSAGE))
    }
}

/// Requires the acting user to be the target of a per-user route.
///
/// `section` names the resource in the rejection message, e.g.
/// "profile" or "actions".
pub fn enforce_match(acting_id: i64, target_id: i64, section: &str) -> AppResult<()> {
    if acting_id == target_id {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "User with id {acting_id} can only access their own {section}"
    )))
}
