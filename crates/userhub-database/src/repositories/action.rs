//! Action ledger repository implementation.

use sqlx::SqlitePool;

use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;
use userhub_core::types::SortOrder;
use userhub_entity::action::Action;

/// Repository for action ledger rows.
///
/// Every listing orders by `(timestamp, id)` so that actions recorded
/// within the same second keep their insertion order.
#[derive(Debug, Clone)]
pub struct ActionRepository {
    pool: SqlitePool,
}

impl ActionRepository {
    /// Create a new action repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a ledger row.
    pub async fn create(&self, owner_id: i64, title: &str, timestamp: &str) -> AppResult<Action> {
        sqlx::query_as::<_, Action>(
            "INSERT INTO actions (title, timestamp, owner_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(title)
        .bind(timestamp)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record action", e))
    }

    /// List a user's actions in the given direction. `limit = 0` means
    /// unlimited.
    pub async fn list_for_user(
        &self,
        owner_id: i64,
        order: SortOrder,
        limit: u32,
    ) -> AppResult<Vec<Action>> {
        let dir = order.as_sql();
        let mut sql =
            format!("SELECT * FROM actions WHERE owner_id = ? ORDER BY timestamp {dir}, id {dir}");
        if limit > 0 {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query_as::<_, Action>(&sql).bind(owner_id);
        if limit > 0 {
            query = query.bind(limit as i64);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list actions", e))
    }

    /// List every action in the ledger, oldest first, optionally restricted
    /// to rows strictly newer than `since`.
    pub async fn list_all_since(&self, since: Option<&str>) -> AppResult<Vec<Action>> {
        let mut sql = String::from("SELECT * FROM actions");
        if since.is_some() {
            sql.push_str(" WHERE timestamp > ?");
        }
        sql.push_str(" ORDER BY timestamp ASC, id ASC");

        let mut query = sqlx::query_as::<_, Action>(&sql);
        if let Some(since) = since {
            query = query.bind(since.to_string());
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan the ledger", e))
    }

    /// Count all actions in the ledger grouped by title.
    pub async fn count_by_title(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as::<_, (String, i64)>("SELECT title, COUNT(*) FROM actions GROUP BY title")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count actions by title", e)
            })
    }
}
