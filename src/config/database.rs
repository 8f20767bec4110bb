//! Database connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable. The returned pool is cheaply cloneable and is carried in the
//! application state for use in request handlers.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool and applies pending
/// migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, the connection fails, or a
/// migration cannot be applied. This runs once during startup, before the
/// server accepts requests.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
