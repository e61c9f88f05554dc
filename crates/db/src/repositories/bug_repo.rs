//! Repository for the `bugs` table.

use sqlx::PgPool;

use crate::models::bug::{Bug, NewBug};

/// Column list for `bugs` queries.
const COLUMNS: &str = "\
    id, title, description, priority, status, tags, \
    assignee_name, reporter_name, created_at, updated_at";

/// Read and insert operations for bugs. There is no update or delete;
/// records are immutable once submitted.
pub struct BugRepo;

impl BugRepo {
    /// Fetch the entire collection, most recent first.
    ///
    /// No pagination and no limit: the views load the full table into
    /// memory and derive everything from that snapshot. `id` breaks ties
    /// between rows inserted within the same timestamp tick.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Bug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bugs ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Bug>(&query).fetch_all(pool).await
    }

    /// Insert a new bug, returning the full persisted row.
    ///
    /// `status`, `id`, and both timestamps come from column defaults; the
    /// client never supplies them.
    pub async fn create(pool: &PgPool, input: &NewBug) -> Result<Bug, sqlx::Error> {
        let query = format!(
            "INSERT INTO bugs \
                (title, description, priority, tags, assignee_name, reporter_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bug>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.tags)
            .bind(&input.assignee_name)
            .bind(&input.reporter_name)
            .fetch_one(pool)
            .await
    }
}
