//! Aggregate views over the whole action ledger.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use userhub_core::result::AppResult;
use userhub_core::types::Window;
use userhub_core::types::timestamp;
use userhub_database::repositories::ActionRepository;
use userhub_entity::action::Action;

/// Aggregated occurrences of one action title.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodEntry {
    /// Every matching timestamp, oldest first.
    pub timestamps: Vec<String>,
    /// Number of occurrences.
    pub size: usize,
    /// Earliest matching timestamp.
    pub min: String,
    /// Latest matching timestamp.
    pub max: String,
}

/// Builds frequency and time-window views over all users' actions.
#[derive(Debug, Clone)]
pub struct HistogramService {
    /// Action repository.
    action_repo: Arc<ActionRepository>,
}

impl HistogramService {
    /// Creates a new histogram service.
    pub fn new(action_repo: Arc<ActionRepository>) -> Self {
        Self { action_repo }
    }

    /// Fetches every action strictly newer than `now - window`, oldest
    /// first. An action stamped exactly on the cutoff falls outside the
    /// window.
    pub async fn actions_in_window(&self, window: Window) -> AppResult<Vec<Action>> {
        let cutoff = timestamp::format(Utc::now() - window.duration());
        self.action_repo.list_all_since(Some(&cutoff)).await
    }

    /// Counts every recorded action per title, across all users.
    pub async fn type_histogram(&self) -> AppResult<BTreeMap<String, i64>> {
        let counts = self.action_repo.count_by_title().await?;
        Ok(counts.into_iter().collect())
    }

    /// Groups actions by title within an optional window. `None` covers
    /// the whole ledger.
    pub async fn period_histogram(
        &self,
        window: Option<Window>,
    ) -> AppResult<BTreeMap<String, PeriodEntry>> {
        let actions = match window {
            Some(window) => self.actions_in_window(window).await?,
            None => self.action_repo.list_all_since(None).await?,
        };

        Ok(group_by_title(actions))
    }
}

/// Folds an oldest-first action list into per-title entries. Because the
/// input is sorted ascending, the first timestamp seen per title is its
/// minimum and the last one overwrites the maximum.
fn group_by_title(actions: Vec<Action>) -> BTreeMap<String, PeriodEntry> {
    let mut histogram: BTreeMap<String, PeriodEntry> = BTreeMap::new();

    for action in actions {
        let Action {
            title, timestamp, ..
        } = action;
        let entry = histogram.entry(title).or_insert_with(|| PeriodEntry {
            timestamps: Vec::new(),
            size: 0,
            min: timestamp.clone(),
            max: timestamp.clone(),
        });
        entry.max = timestamp.clone();
        entry.timestamps.push(timestamp);
        entry.size += 1;
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: i64, title: &str, timestamp: &str) -> Action {
        Action {
            id,
            title: title.to_string(),
            timestamp: timestamp.to_string(),
            owner_id: 1,
        }
    }

    #[test]
    fn grouping_tracks_min_max_and_size_per_title() {
        let actions = vec![
            action(1, "Logged into account", "2020-05-30 17:35:55"),
            action(2, "Queried last actions", "2020-05-30 17:36:10"),
            action(3, "Logged into account", "2020-05-30 17:40:02"),
            action(4, "Logged into account", "2020-05-30 18:01:45"),
        ];

        let histogram = group_by_title(actions);
        assert_eq!(histogram.len(), 2);

        let logins = &histogram["Logged into account"];
        assert_eq!(logins.size, 3);
        assert_eq!(logins.min, "2020-05-30 17:35:55");
        assert_eq!(logins.max, "2020-05-30 18:01:45");
        assert_eq!(
            logins.timestamps,
            vec![
                "2020-05-30 17:35:55",
                "2020-05-30 17:40:02",
                "2020-05-30 18:01:45"
            ]
        );

        let queries = &histogram["Queried last actions"];
        assert_eq!(queries.size, 1);
        assert_eq!(queries.min, queries.max);
    }

    #[test]
    fn grouping_an_empty_ledger_is_empty() {
        assert!(group_by_title(Vec::new()).is_empty());
    }
}
