//! Route definitions for the post resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Post routes mounted at `/posts`.
///
/// ```text
/// POST /      -> create_post
/// GET  /      -> list_posts (not yet specified; answers 501)
/// GET  /{id}  -> find_post
/// PUT  /{id}  -> update_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", get(posts::find_post).put(posts::update_post))
}
