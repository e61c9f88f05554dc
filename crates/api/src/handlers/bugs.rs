//! Handlers for the bug list and submission views.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use bugtrack_core::filter::{self, FilterCriteria};
use bugtrack_core::{bug, tags};
use bugtrack_db::models::bug::{Bug, BugListParams, CreateBug, NewBug};
use bugtrack_db::repositories::BugRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::load_all_or_empty;

// ---------------------------------------------------------------------------
// GET /bugs
// ---------------------------------------------------------------------------

/// Headline stats shown above the bug list. Computed over the full
/// collection, not the filtered subset.
#[derive(Debug, Serialize)]
pub struct ListStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub open: usize,
}

impl ListStats {
    fn from_records(records: &[Bug]) -> Self {
        let by_priority =
            |p: &str| records.iter().filter(|b| b.priority == p).count();

        Self {
            total: records.len(),
            critical: by_priority(bug::PRIORITY_CRITICAL),
            high: by_priority(bug::PRIORITY_HIGH),
            medium: by_priority(bug::PRIORITY_MEDIUM),
            low: by_priority(bug::PRIORITY_LOW),
            open: records.iter().filter(|b| b.status == bug::STATUS_OPEN).count(),
        }
    }
}

/// Response payload for the list view.
#[derive(Debug, Serialize)]
pub struct BugListResponse {
    /// Bugs matching the filters, newest first.
    pub bugs: Vec<Bug>,
    pub stats: ListStats,
}

/// List bugs, narrowed by optional `search`, `status`, and `priority`
/// query parameters (`"All"` or absent means no constraint).
///
/// Loads the full collection and filters in memory; a load failure
/// renders as an empty list, never an error.
pub async fn list_bugs(
    State(state): State<AppState>,
    Query(params): Query<BugListParams>,
) -> impl IntoResponse {
    let all = load_all_or_empty(&state.pool).await;
    let stats = ListStats::from_records(&all);

    let criteria = FilterCriteria::from_inputs(params.search, params.status, params.priority);
    let bugs = filter::filter(all, &criteria);

    Json(DataResponse {
        data: BugListResponse { bugs, stats },
    })
}

// ---------------------------------------------------------------------------
// POST /bugs
// ---------------------------------------------------------------------------

/// Submit a new bug.
///
/// Normalizes the form input (comma-separated tags to a de-duplicated
/// list, empty optionals to absent, priority defaulted to Medium) and
/// inserts. Failures surface synchronously as an HTTP error; there is no
/// optimistic insert, the list view re-fetches on its next load.
pub async fn submit_bug(
    State(state): State<AppState>,
    Json(input): Json<CreateBug>,
) -> AppResult<impl IntoResponse> {
    let priority = match input.priority {
        Some(p) => {
            bug::validate_priority(&p)?;
            p
        }
        None => bug::DEFAULT_PRIORITY.to_string(),
    };

    let new_bug = NewBug {
        title: input.title,
        description: input.description,
        priority,
        tags: input.tags.as_deref().and_then(tags::normalize_tags),
        assignee_name: input.assignee_name.filter(|a| !a.trim().is_empty()),
        reporter_name: input.reporter_name,
    };

    let bug = BugRepo::create(&state.pool, &new_bug).await?;

    tracing::info!(bug_id = bug.id, priority = %bug.priority, "Bug submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: bug })))
}
