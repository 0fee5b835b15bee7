//! Action entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An immutable ledger entry recording a named user event.
///
/// Ownership is one-directional: the action stores the owning user's id as
/// a plain value, and any owner navigation is a query against the users
/// table, never an object reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Action {
    /// Unique action identifier. Monotone across deletions, so
    /// `(timestamp, id)` is a stable chronological key.
    pub id: i64,
    /// The named event, e.g. `"Account created"`.
    pub title: String,
    /// When the event occurred, formatted `"YYYY-MM-DD HH:MM:SS"` (UTC).
    pub timestamp: String,
    /// The user this action belongs to.
    pub owner_id: i64,
}
