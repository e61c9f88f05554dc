//! HTTP handlers for the three views: list, dashboard, and submission.

pub mod bugs;
pub mod dashboard;

use bugtrack_db::models::bug::Bug;
use bugtrack_db::repositories::BugRepo;
use bugtrack_db::DbPool;

/// Load the full bug collection, newest first.
///
/// A load failure is logged and collapses to an empty collection: the
/// read views always render, showing a zero state instead of an error.
/// An empty result is therefore indistinguishable from an empty table.
pub(crate) async fn load_all_or_empty(pool: &DbPool) -> Vec<Bug> {
    match BugRepo::list_all(pool).await {
        Ok(bugs) => bugs,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load bugs; rendering empty collection");
            Vec::new()
        }
    }
}
