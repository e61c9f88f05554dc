//! Bug entity model and DTOs.

use bugtrack_core::bug::BugFields;
use bugtrack_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bugs` table.
///
/// `priority` and `status` are plain strings; rows written by other tools
/// may carry values outside the closed sets and still round-trip to the
/// UI unchanged.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bug {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    /// `None` means untagged; entry order is preserved for display.
    pub tags: Option<Vec<String>>,
    pub assignee_name: Option<String>,
    pub reporter_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BugFields for Bug {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn priority(&self) -> &str {
        &self.priority
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// DTO for the submission form, exactly as the front-end sends it.
#[derive(Debug, Deserialize)]
pub struct CreateBug {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `Medium` when omitted.
    pub priority: Option<String>,
    /// Comma-separated tag input as typed into the form.
    pub tags: Option<String>,
    pub assignee_name: Option<String>,
    pub reporter_name: String,
}

/// Normalized insert payload: tags split and de-duplicated, empty
/// optionals folded to `None`, priority defaulted. Built by the
/// submission handler from a [`CreateBug`].
#[derive(Debug)]
pub struct NewBug {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub tags: Option<Vec<String>>,
    pub assignee_name: Option<String>,
    pub reporter_name: String,
}

/// Query parameters for the list view.
#[derive(Debug, Deserialize)]
pub struct BugListParams {
    pub search: Option<String>,
    /// Exact status, or `"All"` / absent for no constraint.
    pub status: Option<String>,
    /// Exact priority, or `"All"` / absent for no constraint.
    pub priority: Option<String>,
}
