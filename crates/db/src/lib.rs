//! Persistence layer for the coursehub platform.
//!
//! Exposes a connection-pool constructor, migrations, and one repository
//! per entity. Repositories return domain errors ([`CoreError`]), never raw
//! `sqlx::Error`: storage-level constraint violations are translated here,
//! at the storage seam, so callers stay ignorant of the persistence
//! technology.

use coursehub_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Translate a sqlx error into the matching domain error.
///
/// - Unique violations (23505) on `uq_*` constraints become [`CoreError::Conflict`].
///   Operations with a more specific meaning (e.g. duplicate enrollment)
///   refine the result further at their own call site.
/// - Check violations (23514) become [`CoreError::Validation`].
/// - Everything else is logged and sanitized into [`CoreError::Internal`].
pub fn map_db_err(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Conflict(format!(
                    "duplicate value violates unique constraint {constraint}"
                ));
            }
            Some("23514") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Validation(format!(
                    "value violates check constraint {constraint}"
                ));
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
