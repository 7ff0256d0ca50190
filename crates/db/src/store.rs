//! The post store seam.
//!
//! The HTTP layer only ever talks to [`PostStore`]; tests substitute a
//! stub, production wires in [`PgPostStore`](crate::postgres::PgPostStore).

use async_trait::async_trait;
use scribe_core::error::StoreError;

use crate::models::{NewPost, Post, UpdatePost};

/// Asynchronous data access for posts.
///
/// Every method resolves exactly once: with the affected [`Post`] on
/// success, or with a [`StoreError`] on failure. [`StoreError::NotFound`]
/// is the only variant callers are allowed to interpret.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post. The store assigns the id and creation date.
    async fn create_post(&self, new: NewPost) -> Result<Post, StoreError>;

    /// Update an existing post in place and return the updated row.
    async fn update_post(&self, id: &str, changes: UpdatePost) -> Result<Post, StoreError>;

    /// Fetch a post by id.
    async fn find_post(&self, id: &str) -> Result<Post, StoreError>;
}
