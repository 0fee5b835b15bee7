//! Bearer token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use userhub_core::config::auth::AuthConfig;
use userhub_core::error::AppError;
use userhub_core::result::AppResult;

use super::claims::Claims;

/// Uniform message for every token-resolution failure. Callers must not
/// be able to tell a bad signature from an expired token or an unknown
/// subject.
pub const CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Validates bearer tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token, returning its subject.
    ///
    /// Signature, payload shape, presence of `sub`, and expiry are all
    /// checked. Any failure collapses into the same unauthorized error;
    /// the precise cause is only visible at debug log level.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims.sub),
            Err(e) => {
                debug!(cause = %e, "Rejected bearer token");
                Err(AppError::unauthorized(CREDENTIALS_MESSAGE))
            }
        }
    }
}
