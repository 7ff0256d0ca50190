//! Post models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{PostId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
///
/// The `id` and `date` fields are assigned by the store at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a post. Passed through to the store unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

/// DTO for updating a post. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}
