//! Postgres-backed post store.
//!
//! Straightforward CRUD over the `posts` table. Ids are UUIDv4 text and
//! creation timestamps come from the database clock.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use scribe_core::error::StoreError;

use crate::models::{NewPost, Post, UpdatePost};
use crate::store::PostStore;

/// Column list for `posts` queries.
const COLUMNS: &str = "id, author, title, content, date";

/// Provides data access for posts, backed by Postgres.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create_post(&self, new: NewPost) -> Result<Post, StoreError> {
        let query = format!(
            "INSERT INTO posts (id, author, title, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(Uuid::new_v4().to_string())
            .bind(&new.author)
            .bind(&new.title)
            .bind(&new.content)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    /// Only provided fields are changed (falls back to existing values
    /// via `COALESCE`).
    async fn update_post(&self, id: &str, changes: UpdatePost) -> Result<Post, StoreError> {
        let query = format!(
            "UPDATE posts SET \
                 author = COALESCE($2, author), \
                 title = COALESCE($3, title), \
                 content = COALESCE($4, content) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&changes.author)
            .bind(&changes.title)
            .bind(&changes.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?
            .ok_or(StoreError::NotFound)
    }

    async fn find_post(&self, id: &str) -> Result<Post, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?
            .ok_or(StoreError::NotFound)
    }
}
