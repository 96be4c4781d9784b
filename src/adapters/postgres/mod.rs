//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresClassroomRepository` - Classrooms, schedules and enrollments
//! - `PostgresUserRepository` - Registered accounts
//!
//! Schema lives in `migrations/` and is applied with [`run_migrations`].

mod classroom_repository;
mod user_repository;

pub use classroom_repository::PostgresClassroomRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens a connection pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url()
        .ok_or_else(|| sqlx::Error::Configuration("database URL is not set".into()))?;
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(url)
        .await
}

/// Applies pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
