//! Account lifecycle — registration, authentication, password changes,
//! and removal.

use std::sync::Arc;

use tracing::info;

use userhub_auth::password::PasswordHasher;
use userhub_auth::token::TokenEncoder;
use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_core::types::SortOrder;
use userhub_database::repositories::UserRepository;
use userhub_entity::action::Action;
use userhub_entity::user::User;

use crate::audit::{self, AuditService};

/// Uniform login failure message. Unknown usernames and wrong passwords
/// are indistinguishable so callers cannot probe which accounts exist.
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password";

/// An account row together with its recorded actions.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// The account row.
    pub user: User,
    /// The account's ledger entries, oldest first.
    pub actions: Vec<Action>,
}

/// Handles account lifecycle operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder used at login.
    encoder: Arc<TokenEncoder>,
    /// Ledger that records lifecycle events.
    audit: Arc<AuditService>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            audit,
        }
    }

    /// Registers a new account and records its first ledger entry.
    ///
    /// A duplicate username fails on the unique constraint before
    /// anything is recorded.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<UserProfile> {
        let password_hash = self.hasher.hash_password(password)?;
        let user = self.user_repo.create(username, &password_hash).await?;
        let created = self.audit.record(user.id, audit::ACCOUNT_CREATED).await?;

        info!(user_id = user.id, username = %user.username, "Account registered");

        Ok(UserProfile {
            user,
            actions: vec![created],
        })
    }

    /// Verifies credentials, issues a bearer token, and records the
    /// login.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized(LOGIN_FAILED_MESSAGE))?;

        if !self.hasher.verify_password(password, &user.password_hash) {
            return Err(AppError::unauthorized(LOGIN_FAILED_MESSAGE));
        }

        let token = self.encoder.issue(&user.username)?;
        self.audit.record(user.id, audit::LOGGED_IN).await?;

        info!(user_id = user.id, "User authenticated");

        Ok(token)
    }

    /// Loads an account with its full action history.
    pub async fn profile(&self, user_id: i64) -> AppResult<UserProfile> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let actions = self.audit.list(user_id, SortOrder::Asc, 0).await?;

        Ok(UserProfile { user, actions })
    }

    /// Replaces an account's password hash and records the change.
    pub async fn change_password(&self, user_id: i64, new_password: &str) -> AppResult<()> {
        let password_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user_id, &password_hash).await?;
        self.audit.record(user_id, audit::PASSWORD_CHANGED).await?;

        info!(user_id, "Password changed");

        Ok(())
    }

    /// Deletes an account. Its ledger entries cascade with it.
    pub async fn remove(&self, user_id: i64) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.user_repo.delete(user_id).await?;

        info!(user_id, username = %user.username, "Account removed");

        Ok(user)
    }
}
