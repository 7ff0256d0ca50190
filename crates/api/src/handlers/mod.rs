//! HTTP request handlers.

pub mod posts;
