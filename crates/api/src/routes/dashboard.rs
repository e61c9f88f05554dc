//! Route definitions for the analytics dashboard view.
//!
//! Mounted at `/dashboard` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes.
///
/// ```text
/// GET /    -> dashboard_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::dashboard_summary))
}
