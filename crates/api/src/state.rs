use std::sync::Arc;

use scribe_db::store::PostStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The post store the handlers delegate to.
    pub store: Arc<dyn PostStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
