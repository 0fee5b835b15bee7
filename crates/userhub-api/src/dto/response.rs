//! Response DTOs.

use serde::{Deserialize, Serialize};

use userhub_entity::action::Action;
use userhub_service::account::UserProfile;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Root welcome response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub msg: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed JWT.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

/// A user with their recorded actions embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Activation flag.
    pub is_active: bool,
    /// The user's ledger entries, oldest first.
    pub actions: Vec<Action>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user.id,
            username: profile.user.username,
            is_active: profile.user.is_active,
            actions: profile.actions,
        }
    }
}

/// Confirmation of a deleted account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedUserResponse {
    /// Username of the removed account.
    pub username: String,
    /// Its former ID.
    pub id: i64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
