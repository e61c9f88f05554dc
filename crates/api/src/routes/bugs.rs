//! Route definitions for the bug list and submission views.
//!
//! Mounted at `/bugs` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::bugs;
use crate::state::AppState;

/// Bug routes.
///
/// ```text
/// POST /    -> submit_bug
/// GET  /    -> list_bugs (search/status/priority query filters)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(bugs::submit_bug).get(bugs::list_bugs))
}
