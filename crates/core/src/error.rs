use thiserror::Error;

/// Domain-level errors produced by the pure logic in this crate.
///
/// The API layer wraps this in its own error type and maps each variant
/// to an HTTP status.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input rejected by a domain rule (e.g. a priority outside the
    /// closed set).
    #[error("{0}")]
    Validation(String),
}
