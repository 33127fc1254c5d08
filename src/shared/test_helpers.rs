#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::core::config::DatabaseConfig;
#[cfg(test)]
use crate::core::{database, seed};

#[cfg(test)]
fn test_database_config() -> DatabaseConfig {
    // A shared in-memory database only exists as long as its single
    // connection does, so the pool is pinned to one connection.
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 5,
        idle_timeout_secs: 600,
        max_lifetime_secs: 1800,
    }
}

/// Fresh in-memory database with migrations applied.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = database::create_pool(&test_database_config())
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");
    pool
}

/// In-memory database with migrations and the bootstrap seed applied.
#[cfg(test)]
pub async fn seeded_pool() -> SqlitePool {
    let pool = test_pool().await;
    seed::run(&pool).await.expect("seed");
    pool
}
