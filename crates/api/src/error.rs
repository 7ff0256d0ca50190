use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scribe_core::error::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for store outcomes and adds HTTP-specific
/// variants. Implements [`IntoResponse`] so no error ever crosses the
/// handler boundary.
///
/// Failure responses carry an empty body: clients get exactly the status
/// code and nothing else.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from the post store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A create failure. Create has no not-found case, so every store
    /// error maps to 500, including a (nonsensical) not-found.
    #[error("Create failed: {0}")]
    CreateFailed(#[source] StoreError),

    /// The route exists but its behaviour is not yet specified.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The status code this error maps to.
    ///
    /// Exactly the not-found store outcome maps to 404; every other
    /// store error maps to 500 without further inspection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CreateFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Store error");
        }

        status.into_response()
    }
}
