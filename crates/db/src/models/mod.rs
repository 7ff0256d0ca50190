//! Database models and request DTOs.

pub mod post;

pub use post::{NewPost, Post, UpdatePost};
