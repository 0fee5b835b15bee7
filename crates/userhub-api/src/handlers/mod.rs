//! Route handlers organized by domain.

pub mod action;
pub mod auth;
pub mod health;
pub mod histogram;
pub mod user;
