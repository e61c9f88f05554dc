//! Shared response envelope for API handlers.
//!
//! Every successful response is wrapped in `{ "data": ... }` so the
//! front-end can unwrap uniformly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
