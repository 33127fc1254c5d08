use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{CountDto, StatsDto, ViewSumDto};
use crate::features::auth::repository::UserRepository;
use crate::features::listings::models::{Listing, ListingStatus};
use crate::features::listings::repository::ListingRepository;

/// Aggregate stats and listing moderation.
pub struct AdminService {
    users: Arc<dyn UserRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl AdminService {
    pub fn new(users: Arc<dyn UserRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { users, listings }
    }

    pub async fn stats(&self) -> Result<StatsDto> {
        let users = self.users.count().await?;
        let listings = self.listings.count().await?;
        let pending = self.listings.count_by_status(ListingStatus::Pending).await?;
        let views = self.listings.sum_views().await?;

        Ok(StatsDto {
            users: CountDto { count: users },
            listings: CountDto { count: listings },
            pending: CountDto { count: pending },
            views: ViewSumDto { count: views },
        })
    }

    /// Moderation queue: listings in the given status (pending by default),
    /// joined with category, city and owner names.
    pub async fn moderation_queue(&self, status: Option<ListingStatus>) -> Result<Vec<Listing>> {
        self.listings
            .list_by_status(status.unwrap_or(ListingStatus::Pending))
            .await
    }

    /// Move a listing out of moderation.
    ///
    /// `pending` is only ever the initial state, never a target; published
    /// and rejected are terminal, so the transition graph stays one-way.
    /// Re-applying the current status is an idempotent success.
    pub async fn set_listing_status(&self, id: i64, status: ListingStatus) -> Result<()> {
        if status == ListingStatus::Pending {
            return Err(AppError::Validation("Invalid status".to_string()));
        }

        let affected = self.listings.set_status(id, status).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Listing not found".to_string()));
        }

        tracing::info!(listing_id = id, status = %status, "listing moderated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::repository::SqliteUserRepository;
    use crate::features::listings::repository::SqliteListingRepository;
    use crate::shared::test_helpers::{seeded_pool, test_pool};
    use sqlx::SqlitePool;

    fn service(pool: &SqlitePool) -> AdminService {
        AdminService::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteListingRepository::new(pool.clone())),
        )
    }

    async fn insert_pending(pool: &SqlitePool, slug: &str) -> i64 {
        sqlx::query_scalar(
            r#"
            INSERT INTO listings (user_id, category_id, city_id, title, slug, description)
            VALUES (3, 1, 1, 'Test', ?, 'desc')
            RETURNING id
            "#,
        )
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn stats_with_empty_store() {
        let pool = test_pool().await;
        let stats = service(&pool).stats().await.unwrap();
        assert_eq!(stats.users.count, 0);
        assert_eq!(stats.listings.count, 0);
        assert_eq!(stats.pending.count, 0);
        assert_eq!(stats.views.count, None);
    }

    #[tokio::test]
    async fn stats_after_seeding() {
        let pool = seeded_pool().await;
        let stats = service(&pool).stats().await.unwrap();
        assert_eq!(stats.users.count, 3);
        assert_eq!(stats.listings.count, 5);
        assert_eq!(stats.pending.count, 0);
        assert_eq!(stats.views.count, Some(0));
    }

    #[tokio::test]
    async fn queue_defaults_to_pending_with_joins() {
        let pool = seeded_pool().await;
        let id = insert_pending(&pool, "test-pending").await;

        let queue = service(&pool).moderation_queue(None).await.unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, id);
        assert_eq!(queue[0].owner_name.as_deref(), Some("Client Lambda"));
        assert_eq!(queue[0].city_name.as_deref(), Some("Antananarivo"));
    }

    #[tokio::test]
    async fn publish_is_idempotent() {
        let pool = seeded_pool().await;
        let id = insert_pending(&pool, "test-pending").await;
        let svc = service(&pool);

        svc.set_listing_status(id, ListingStatus::Published)
            .await
            .unwrap();
        svc.set_listing_status(id, ListingStatus::Published)
            .await
            .unwrap();

        let status: String = sqlx::query_scalar("SELECT status FROM listings WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(status, "published");
    }

    #[tokio::test]
    async fn pending_is_not_a_valid_target() {
        let pool = seeded_pool().await;
        let id = insert_pending(&pool, "test-pending").await;

        let err = service(&pool)
            .set_listing_status(id, ListingStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid status"));
    }

    #[tokio::test]
    async fn unknown_listing_is_not_found() {
        let pool = seeded_pool().await;
        let err = service(&pool)
            .set_listing_status(999, ListingStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
