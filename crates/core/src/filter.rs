//! List-view filter engine.
//!
//! A [`FilterCriteria`] narrows a loaded bug collection by free text,
//! status, and priority. All three conditions are combined with AND, and
//! filtering preserves input order. Unknown status/priority values simply
//! match nothing; they are not rejected.

use crate::bug::BugFields;

/// Sentinel value the UI sends for the status/priority dropdowns when no
/// constraint is selected.
pub const FILTER_ALL: &str = "All";

/// Criteria for narrowing the displayed bug list.
///
/// `None` for status or priority means "no constraint"; an empty
/// `search_text` matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw UI inputs, folding the [`FILTER_ALL`]
    /// sentinel (and absent values) into "no constraint".
    pub fn from_inputs(
        search: Option<String>,
        status: Option<String>,
        priority: Option<String>,
    ) -> Self {
        Self {
            search_text: search.unwrap_or_default(),
            status: status.filter(|s| s != FILTER_ALL),
            priority: priority.filter(|p| p != FILTER_ALL),
        }
    }
}

/// Whether a single record satisfies the criteria.
///
/// The text condition is a case-insensitive substring match against the
/// title, or against the description when one exists.
pub fn matches<T: BugFields>(record: &T, criteria: &FilterCriteria) -> bool {
    let matches_search = if criteria.search_text.is_empty() {
        true
    } else {
        let needle = criteria.search_text.to_lowercase();
        record.title().to_lowercase().contains(&needle)
            || record
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    };

    let matches_status = criteria
        .status
        .as_deref()
        .is_none_or(|s| record.status() == s);

    let matches_priority = criteria
        .priority
        .as_deref()
        .is_none_or(|p| record.priority() == p);

    matches_search && matches_status && matches_priority
}

/// Keep only the records matching the criteria, preserving input order.
pub fn filter<T: BugFields>(mut records: Vec<T>, criteria: &FilterCriteria) -> Vec<T> {
    records.retain(|r| matches(r, criteria));
    records
}
