//! Request DTOs and query arguments.

use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Query arguments for the actions listing.
///
/// `sort` stays a plain string here; it is parsed into a `SortOrder` in
/// the handler so an unsupported value produces this API's own
/// validation message rather than a deserializer rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionListParams {
    /// Sort direction, `asc` or `desc`.
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Maximum number of rows; `0` means unlimited.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query arguments for the period histogram.
///
/// An absent `period_time` falls back to a one-day window; an empty
/// string disables windowing entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodParams {
    /// Window name: `hour`, `day`, or `month`.
    pub period_time: Option<String>,
}

/// Query arguments for the password change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordParams {
    /// The replacement password, in the clear.
    pub new_password: String,
}

fn default_sort() -> String {
    "desc".to_string()
}

fn default_limit() -> u32 {
    100
}
