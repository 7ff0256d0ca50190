//! Domain types shared across the scribe workspace.

pub mod error;
pub mod types;
