use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{NewUser, User};

/// Store operations for user rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row.
    async fn create(&self, new_user: &NewUser) -> Result<User>;
    /// Look up a user by email (unique column).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Look up a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    /// Total number of registered users.
    async fn count(&self) -> Result<i64>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, password, role, created_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                return AppError::Conflict("Email already registered".to_string());
            }
            tracing::error!("Failed to insert user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user by email: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count users: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(count)
    }
}
