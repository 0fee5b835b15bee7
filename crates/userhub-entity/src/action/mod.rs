//! Action ledger entities.

pub mod model;

pub use model::Action;
