pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts            create (POST), list (GET)
/// /posts/{id}       find (GET), update (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/posts", posts::router())
}
