//! # userhub-service
//!
//! Business logic service layer for UserHub. Each service orchestrates
//! repositories and authentication primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod audit;
pub mod histogram;

pub use account::{AccountService, UserProfile};
pub use audit::AuditService;
pub use histogram::{HistogramService, PeriodEntry};
