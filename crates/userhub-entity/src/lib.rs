//! # userhub-entity
//!
//! Domain entity models for UserHub. Every struct in this crate
//! represents a database table row. All entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod action;
pub mod user;

pub use action::Action;
pub use user::User;
