//! Core type definitions used across the UserHub workspace.

pub mod sorting;
pub mod timestamp;
pub mod window;

pub use sorting::SortOrder;
pub use window::Window;
