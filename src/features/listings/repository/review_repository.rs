use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::listings::models::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Reviews for a listing, newest first, joined with the reviewer's name.
    async fn list_for_listing(&self, listing_id: i64) -> Result<Vec<Review>>;
}

pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepository {
    async fn list_for_listing(&self, listing_id: i64) -> Result<Vec<Review>> {
        // id breaks ties between reviews sharing a creation timestamp
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT reviews.id, reviews.listing_id, reviews.user_id, reviews.rating,
                   reviews.comment, reviews.created_at, users.name AS user_name
            FROM reviews
            JOIN users ON reviews.user_id = users.id
            WHERE reviews.listing_id = ?
            ORDER BY reviews.created_at DESC, reviews.id DESC
            "#,
        )
        .bind(listing_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviews: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reviews)
    }
}
