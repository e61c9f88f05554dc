//! Handler for the analytics dashboard view.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use bugtrack_core::bug;
use bugtrack_core::report::{self, TagCount};
use bugtrack_db::models::bug::Bug;

use crate::response::DataResponse;
use crate::state::AppState;

use super::load_all_or_empty;

/// Number of entries in the recent-bugs panel.
const RECENT_LIMIT: usize = 5;

/// Number of entries in the top-tags panel.
const TOP_TAGS_LIMIT: usize = 5;

/// One slice of a priority or status distribution.
#[derive(Debug, Serialize)]
pub struct DistributionSlice {
    pub value: String,
    pub count: usize,
    /// Share of the total in `[0, 1]`; `0` for an empty collection.
    pub share: f64,
}

/// Full dashboard payload, derived in one pass from the loaded snapshot.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    /// Counts per priority, ascending severity order, zero-filled.
    pub by_priority: Vec<DistributionSlice>,
    /// Counts per status, workflow order, zero-filled.
    pub by_status: Vec<DistributionSlice>,
    /// The five most recently reported bugs.
    pub recent: Vec<Bug>,
    /// The five most used tags, ties broken by first appearance.
    pub top_tags: Vec<TagCount>,
}

/// GET /dashboard -- aggregate statistics over the whole collection.
///
/// A load failure renders as the zero state (all counts 0), never as an
/// error.
pub async fn dashboard_summary(State(state): State<AppState>) -> impl IntoResponse {
    let bugs = load_all_or_empty(&state.pool).await;

    let summary = DashboardSummary {
        total: bugs.len(),
        by_priority: distribution(&bugs, bug::VALID_PRIORITIES, |b| b.priority.as_str()),
        by_status: distribution(&bugs, bug::VALID_STATUSES, |b| b.status.as_str()),
        top_tags: report::top_tags(&bugs, TOP_TAGS_LIMIT),
        recent: report::recent_n(&bugs, RECENT_LIMIT).to_vec(),
    };

    Json(DataResponse { data: summary })
}

/// Zero-filled counts for each allowed value, with share-of-total.
fn distribution<F>(records: &[Bug], allowed: &[&str], field: F) -> Vec<DistributionSlice>
where
    F: Fn(&Bug) -> &str,
{
    let total = records.len();

    report::count_by(records, allowed, field)
        .into_iter()
        .map(|vc| {
            let share = report::percentage_of(vc.count, total);
            DistributionSlice {
                value: vc.value,
                count: vc.count,
                share,
            }
        })
        .collect()
}
