//! Reporting aggregations behind the dashboard and list-view stats.
//!
//! All functions here are single passes (or one pass per enumerated value)
//! over an in-memory collection, with no side effects. None of them sort
//! the input by time; `recent_n` relies on the loader's newest-first order.

use serde::Serialize;

use crate::bug::BugFields;

/// Count of records carrying one enumerated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Usage count for one distinct tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count occurrences of each value in `allowed` across the records.
///
/// Every allowed value appears in the result, in the order given, with a
/// zero count when absent. Field values outside `allowed` (possible for
/// rows written by other tools) contribute to no bucket.
pub fn count_by<T, F>(records: &[T], allowed: &[&str], field: F) -> Vec<ValueCount>
where
    F: Fn(&T) -> &str,
{
    allowed
        .iter()
        .map(|value| ValueCount {
            value: (*value).to_string(),
            count: records.iter().filter(|r| field(r) == *value).count(),
        })
        .collect()
}

/// The first `n` records in input order, or all of them when fewer exist.
pub fn recent_n<T>(records: &[T], n: usize) -> &[T] {
    &records[..records.len().min(n)]
}

/// The `n` most frequently used tags, most frequent first.
///
/// Tags are counted across all records. Ties are broken by first
/// appearance in the collection, which keeps the ranking stable between
/// loads of the same data.
pub fn top_tags<T: BugFields>(records: &[T], n: usize) -> Vec<TagCount> {
    // Vec instead of a map so first-seen order survives for tie-breaking.
    let mut counts: Vec<TagCount> = Vec::new();

    for record in records {
        for tag in record.tags() {
            match counts.iter_mut().find(|c| c.tag == *tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    // Stable sort: equal counts keep their first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Fraction of `total` that `count` represents, in `[0, 1]`.
///
/// Returns `0.0` when `total` is zero.
pub fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
