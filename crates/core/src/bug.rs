//! The bug record contract: closed priority/status sets, their creation
//! defaults, and the field-access seam shared by the filter and reporting
//! functions.
//!
//! Priorities and statuses are plain strings rather than Rust enums on
//! purpose: a value outside the closed set arriving from storage must pass
//! through to the caller uninterpreted (the UI renders it with a fallback
//! treatment instead of the row disappearing or the request failing).
//! The closed sets below are enforced only where this system writes.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "Low";
pub const PRIORITY_MEDIUM: &str = "Medium";
pub const PRIORITY_HIGH: &str = "High";
pub const PRIORITY_CRITICAL: &str = "Critical";

/// All valid priorities, in ascending severity order. Dashboard
/// distributions are reported in this order.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_MEDIUM,
    PRIORITY_HIGH,
    PRIORITY_CRITICAL,
];

/// Priority assigned when a submission does not specify one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_OPEN: &str = "Open";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_TESTING: &str = "Testing";
pub const STATUS_RESOLVED: &str = "Resolved";
pub const STATUS_CLOSED: &str = "Closed";

/// All valid workflow statuses, in workflow order. There are no transition
/// rules; any status may follow any other.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_OPEN,
    STATUS_IN_PROGRESS,
    STATUS_TESTING,
    STATUS_RESOLVED,
    STATUS_CLOSED,
];

/// Status assigned to every newly created bug.
pub const DEFAULT_STATUS: &str = STATUS_OPEN;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a submitted priority is one of the closed set.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Field access seam
// ---------------------------------------------------------------------------

/// Read access to the bug record fields the filter and reporting functions
/// need.
///
/// Implemented by the database entity in `bugtrack-db`; this crate stays
/// free of sqlx and operates on anything that can show these fields.
pub trait BugFields {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn priority(&self) -> &str;
    fn status(&self) -> &str;
    /// Tags in entry order; empty slice when untagged.
    fn tags(&self) -> &[String];
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
