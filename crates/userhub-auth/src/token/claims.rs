//! JWT claims structure for bearer tokens.

use serde::{Deserialize, Serialize};

/// JWT claims payload embedded in every issued token.
///
/// The payload is deliberately minimal: the subject and the absolute
/// expiry. Nothing else about the user is trusted from the token; the
/// identity guard re-resolves the subject against the store on every
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username the token was issued for.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
