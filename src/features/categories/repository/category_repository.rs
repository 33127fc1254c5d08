use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, unfiltered.
    async fn list(&self) -> Result<Vec<Category>>;
}

pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, icon, description
            FROM categories
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }
}
