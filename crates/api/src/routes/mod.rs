pub mod bugs;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /bugs          GET list (+ filters), POST submit
/// /dashboard     GET summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bugs", bugs::router())
        .nest("/dashboard", dashboard::router())
}
