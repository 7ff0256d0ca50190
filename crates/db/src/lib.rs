//! Data access layer for the scribe post service.
//!
//! Exposes the [`PostStore`](store::PostStore) seam the HTTP layer talks
//! to, the post models, and a Postgres-backed implementation.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod postgres;
pub mod store;

pub use postgres::PgPostStore;
pub use store::PostStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
