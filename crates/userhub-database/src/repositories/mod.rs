//! Repository implementations for the UserHub entities.

pub mod action;
pub mod user;

pub use action::ActionRepository;
pub use user::UserRepository;
