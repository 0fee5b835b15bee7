//! # userhub-database
//!
//! SQLite connection management and concrete repository implementations
//! for the UserHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;
