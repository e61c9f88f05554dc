//! Pure domain logic for the bug tracker.
//!
//! This crate has no database or HTTP dependencies. It defines the bug
//! record contract (closed priority/status sets and their defaults), the
//! reporting aggregations behind the dashboard, the list-view filter
//! engine, and tag normalization for the submission flow. Everything here
//! is a pure function over in-memory data, unit-tested in isolation.

pub mod bug;
pub mod error;
pub mod filter;
pub mod report;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_support;

/// Primary key type for persisted records (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Storage-assigned timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
