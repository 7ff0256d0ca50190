//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener. The post store is replaced by
//! [`StubStore`], a programmable stand-in that records how often each
//! store method is invoked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use scribe_api::config::ServerConfig;
use scribe_api::routes;
use scribe_api::state::AppState;
use scribe_core::error::StoreError;
use scribe_db::models::{NewPost, Post, UpdatePost};
use scribe_db::store::PostStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given post store.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app<S: PostStore + 'static>(store: Arc<S>) -> Router {
    let config = test_config();

    let state = AppState {
        store: store as Arc<dyn PostStore>,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Stub store
// ---------------------------------------------------------------------------

/// A programmable [`PostStore`] for handler tests.
///
/// Each store method consumes one queued outcome and bumps a call
/// counter, so tests can assert both the response mapping and that a
/// handler talks to the store at most once per request. A method invoked
/// with nothing queued fails with an `Internal` error.
#[derive(Default)]
pub struct StubStore {
    create_result: Mutex<Option<Result<Post, StoreError>>>,
    update_result: Mutex<Option<Result<Post, StoreError>>>,
    find_result: Mutex<Option<Result<Post, StoreError>>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    find_calls: AtomicUsize,
}

impl StubStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn queue_create(&self, result: Result<Post, StoreError>) {
        *self.create_result.lock().unwrap() = Some(result);
    }

    pub fn queue_update(&self, result: Result<Post, StoreError>) {
        *self.update_result.lock().unwrap() = Some(result);
    }

    pub fn queue_find(&self, result: Result<Post, StoreError>) {
        *self.find_result.lock().unwrap() = Some(result);
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostStore for StubStore {
    async fn create_post(&self, _new: NewPost) -> Result<Post, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(StoreError::Internal("unexpected create_post call".into())))
    }

    async fn update_post(&self, _id: &str, _changes: UpdatePost) -> Result<Post, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.update_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(StoreError::Internal("unexpected update_post call".into())))
    }

    async fn find_post(&self, _id: &str) -> Result<Post, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.find_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(StoreError::Internal("unexpected find_post call".into())))
    }
}

/// Build a post row the way the store would return it.
pub fn sample_post(id: &str, author: &str, title: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        author: author.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date: chrono::Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
