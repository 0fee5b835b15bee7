//! # userhub-auth
//!
//! Authentication and authorization for UserHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — bearer token (JWT) creation and validation
//! - `guard` — token-to-user resolution and actor/target matching

pub mod guard;
pub mod password;
pub mod token;

pub use guard::{IdentityGuard, enforce_match};
pub use password::PasswordHasher;
pub use token::{Claims, TokenDecoder, TokenEncoder};
