//! The action ledger — an append-only record of named user events.

use std::collections::HashSet;
use std::sync::Arc;

use userhub_core::result::AppResult;
use userhub_core::types::SortOrder;
use userhub_core::types::timestamp;
use userhub_database::repositories::ActionRepository;
use userhub_entity::action::Action;

/// Title recorded when an account is registered.
pub const ACCOUNT_CREATED: &str = "Account created";
/// Title recorded on successful authentication.
pub const LOGGED_IN: &str = "Logged into account";
/// Title recorded when a password is changed.
pub const PASSWORD_CHANGED: &str = "Changed user password";
/// Title recorded by the latest-per-kind query.
pub const QUERIED_LAST_ACTIONS: &str = "Queried last actions";
/// Title recorded by the type-histogram query.
pub const QUERIED_TYPES_HISTOGRAM: &str = "Queried types histogram";
/// Title recorded by the period-histogram query.
pub const QUERIED_PERIODS_HISTOGRAM: &str = "Queried periods histogram";

/// Builds the title recorded by a paged actions query, naming the
/// direction and limit that were asked for. `limit = 0` reads as
/// unlimited.
pub fn actions_query_title(order: SortOrder, limit: u32) -> String {
    let scope = if limit == 0 {
        "unlimited".to_string()
    } else {
        format!("limited to {limit}")
    };
    format!("Queried actions in {} sorting ({scope})", order.as_label())
}

/// Records and reads the per-user action ledger.
///
/// Rows are append-only; nothing in the system updates or deletes an
/// action directly (removal only happens by cascade when the owning
/// user is deleted).
#[derive(Debug, Clone)]
pub struct AuditService {
    /// Action repository.
    action_repo: Arc<ActionRepository>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(action_repo: Arc<ActionRepository>) -> Self {
        Self { action_repo }
    }

    /// Appends a ledger entry stamped with the current UTC time.
    pub async fn record(&self, owner_id: i64, title: &str) -> AppResult<Action> {
        let stamped = timestamp::now();
        self.action_repo.create(owner_id, title, &stamped).await
    }

    /// Lists a user's actions in the given direction. `limit = 0` means
    /// unlimited.
    pub async fn list(
        &self,
        owner_id: i64,
        order: SortOrder,
        limit: u32,
    ) -> AppResult<Vec<Action>> {
        self.action_repo.list_for_user(owner_id, order, limit).await
    }

    /// Returns the most recent action of each distinct title, most
    /// recent first.
    ///
    /// The full history is read in descending order, so keeping the
    /// first occurrence of each title keeps the latest one.
    pub async fn latest_per_kind(&self, owner_id: i64) -> AppResult<Vec<Action>> {
        let history = self
            .action_repo
            .list_for_user(owner_id, SortOrder::Desc, 0)
            .await?;

        let mut seen = HashSet::new();
        Ok(history
            .into_iter()
            .filter(|action| seen.insert(action.title.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_title_names_direction_and_limit() {
        assert_eq!(
            actions_query_title(SortOrder::Desc, 100),
            "Queried actions in descending sorting (limited to 100)"
        );
        assert_eq!(
            actions_query_title(SortOrder::Asc, 5),
            "Queried actions in ascending sorting (limited to 5)"
        );
    }

    #[test]
    fn query_title_reads_zero_limit_as_unlimited() {
        assert_eq!(
            actions_query_title(SortOrder::Asc, 0),
            "Queried actions in ascending sorting (unlimited)"
        );
        assert_eq!(
            actions_query_title(SortOrder::Desc, 0),
            "Queried actions in descending sorting (unlimited)"
        );
    }
}
