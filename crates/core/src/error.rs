//! Error taxonomy for the post store.
//!
//! The HTTP layer only ever distinguishes "the post does not exist" from
//! "something else went wrong"; every variant other than [`StoreError::NotFound`]
//! maps to a generic internal failure.

/// An error produced by a post store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested post does not exist. The display text is the
    /// store contract's discriminator and must stay exactly as written.
    #[error("Post not found")]
    NotFound,

    /// A failure inside the storage backend.
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Any other store-side failure with a human-readable message.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Wrap an arbitrary backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }

    /// Whether this error means the post does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
