//! # userhub-core
//!
//! Core crate for UserHub. Contains configuration schemas, shared types
//! (sort order, aggregation windows, the ledger timestamp format), and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other UserHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
