//! Persistence backends for character documents.
//!
//! Provides the Postgres pool bootstrap (connect, probe, migrate) and the two
//! [`CharacterStore`](asterix_core::store::CharacterStore) implementations.

use sqlx::postgres::PgPoolOptions;

pub mod stores;

pub use stores::{MemoryCharacterStore, PgCharacterStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
