use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::listings::dtos::{
    CreateListingDto, CreatedListingDto, ListingDetailDto, ListingSearchQuery,
};
use crate::features::listings::models::{Listing, NewListing};
use crate::features::listings::repository::{
    ListingRepository, ListingSearchFilters, ReviewRepository,
};
use crate::shared::slug::slugify;

/// Search, detail and creation of listings.
pub struct ListingService {
    listings: Arc<dyn ListingRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ListingService {
    pub fn new(listings: Arc<dyn ListingRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { listings, reviews }
    }

    /// Search over published listings. Unpublished and rejected listings
    /// never appear here, whatever the filter combination.
    pub async fn search(&self, query: ListingSearchQuery) -> Result<Vec<Listing>> {
        let filters = ListingSearchFilters {
            // Empty filter values behave like absent ones
            category: query.category.filter(|s| !s.is_empty()),
            city: query.city,
            search: query.search.filter(|s| !s.is_empty()),
            featured: query.featured.as_deref() == Some("true"),
        };

        self.listings.search_published(&filters).await
    }

    /// Detail view by slug, any status. Counts one view per fetch with no
    /// dedup; the returned listing carries the incremented counter.
    pub async fn detail(&self, slug: &str) -> Result<ListingDetailDto> {
        let mut listing = self
            .listings
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

        self.listings.increment_views(listing.id).await?;
        listing.views += 1;

        let reviews = self.reviews.list_for_listing(listing.id).await?;

        Ok(ListingDetailDto { listing, reviews })
    }

    /// All of the caller's own listings; no status gating since the caller
    /// is the owner.
    pub async fn my_listings(&self, user_id: i64) -> Result<Vec<Listing>> {
        self.listings.list_by_owner(user_id).await
    }

    /// Create a listing owned by `user_id`. Always starts pending.
    pub async fn create(&self, user_id: i64, dto: CreateListingDto) -> Result<CreatedListingDto> {
        // Timestamp suffix keeps slugs unique even for identical titles
        // submitted concurrently.
        let slug = format!("{}-{}", slugify(&dto.title), Utc::now().timestamp_millis());

        let new_listing = NewListing {
            user_id,
            category_id: dto.category_id,
            city_id: dto.city_id,
            title: dto.title,
            slug: slug.clone(),
            description: dto.description,
            address: dto.address,
            phone: dto.phone,
            whatsapp: dto.whatsapp,
            email: dto.email,
            website: dto.website,
            logo: dto.logo,
            images: dto.images,
            hours: dto.hours,
        };

        let id = self.listings.insert(&new_listing).await?;
        tracing::info!(listing_id = id, slug = %slug, "listing created");

        Ok(CreatedListingDto { id, slug })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::listings::models::ListingStatus;
    use crate::features::listings::repository::{SqliteListingRepository, SqliteReviewRepository};
    use crate::shared::test_helpers::seeded_pool;
    use sqlx::SqlitePool;

    fn service(pool: &SqlitePool) -> ListingService {
        ListingService::new(
            Arc::new(SqliteListingRepository::new(pool.clone())),
            Arc::new(SqliteReviewRepository::new(pool.clone())),
        )
    }

    fn create_dto(title: &str) -> CreateListingDto {
        CreateListingDto {
            title: title.to_string(),
            category_id: 1,
            city_id: 1,
            description: "Une description".to_string(),
            address: None,
            phone: None,
            whatsapp: None,
            email: None,
            website: None,
            logo: None,
            images: Vec::new(),
            hours: None,
        }
    }

    #[tokio::test]
    async fn search_without_filters_returns_all_published() {
        let pool = seeded_pool().await;
        let listings = service(&pool)
            .search(ListingSearchQuery::default())
            .await
            .unwrap();
        assert_eq!(listings.len(), 5);
        assert!(listings
            .iter()
            .all(|l| l.status == ListingStatus::Published));
        assert!(listings.iter().all(|l| l.category_name.is_some()));
    }

    #[tokio::test]
    async fn filters_compose() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let featured = svc
            .search(ListingSearchQuery {
                featured: Some("true".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|l| l.is_featured));

        let hotels = svc
            .search(ListingSearchQuery {
                category: Some("hotels-hebergement".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hotels.len(), 2);

        let hotels_in_tana = svc
            .search(ListingSearchQuery {
                category: Some("hotels-hebergement".to_string()),
                city: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hotels_in_tana.len(), 1);
        assert_eq!(hotels_in_tana[0].slug, "hotel-carlton");
    }

    #[tokio::test]
    async fn search_substring_is_case_insensitive() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let by_description = svc
            .search(ListingSearchQuery {
                search: Some("CUISINE".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].slug, "le-jardin-antanimena");

        let by_title = svc
            .search(ListingSearchQuery {
                search: Some("avenue".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_title.len(), 1);
    }

    #[tokio::test]
    async fn featured_filter_requires_literal_true() {
        let pool = seeded_pool().await;
        let listings = service(&pool)
            .search(ListingSearchQuery {
                featured: Some("1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listings.len(), 5);
    }

    #[tokio::test]
    async fn pending_listings_hidden_from_search_but_not_from_owner_or_detail() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let created = svc.create(3, create_dto("Garage Rakoto")).await.unwrap();

        let search = svc.search(ListingSearchQuery::default()).await.unwrap();
        assert!(search.iter().all(|l| l.id != created.id));

        let mine = svc.my_listings(3).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].status, ListingStatus::Pending);

        let detail = svc.detail(&created.slug).await.unwrap();
        assert_eq!(detail.listing.status, ListingStatus::Pending);
    }

    #[tokio::test]
    async fn detail_increments_views_by_one_per_fetch() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let first = svc.detail("hotel-carlton").await.unwrap();
        assert_eq!(first.listing.views, 1);

        let second = svc.detail("hotel-carlton").await.unwrap();
        assert_eq!(second.listing.views, 2);

        let stored: i64 =
            sqlx::query_scalar("SELECT views FROM listings WHERE slug = 'hotel-carlton'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored, 2);
    }

    #[tokio::test]
    async fn detail_joins_names_and_reviews_newest_first() {
        let pool = seeded_pool().await;
        let detail = service(&pool).detail("hotel-carlton").await.unwrap();

        assert_eq!(detail.listing.category_name.as_deref(), Some("Hôtels & Hébergement"));
        assert_eq!(detail.listing.city_name.as_deref(), Some("Antananarivo"));
        assert_eq!(detail.listing.owner_name.as_deref(), Some("Jean Pro"));

        assert_eq!(detail.reviews.len(), 2);
        // Both seeded reviews share a creation timestamp; the later insert
        // comes first.
        assert_eq!(detail.reviews[0].rating, 4);
        assert_eq!(detail.reviews[0].user_name, "Jean Pro");
        assert_eq!(detail.reviews[1].user_name, "Client Lambda");
    }

    #[tokio::test]
    async fn detail_unknown_slug_is_not_found() {
        let pool = seeded_pool().await;
        let err = service(&pool).detail("no-such-slug").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Not found"));
    }

    #[tokio::test]
    async fn create_derives_slug_from_folded_title() {
        let pool = seeded_pool().await;
        let created = service(&pool)
            .create(3, create_dto("Hôtel Carlton"))
            .await
            .unwrap();

        let (prefix, suffix) = created.slug.rsplit_once('-').unwrap();
        assert_eq!(prefix, "hotel-carlton");
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn duplicate_titles_get_distinct_slugs() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let first = svc.create(3, create_dto("Chez Mariette")).await.unwrap();
        let second = svc.create(3, create_dto("Chez Mariette")).await.unwrap();
        assert_ne!(first.slug, second.slug);
    }

    #[tokio::test]
    async fn images_round_trip_in_order() {
        let pool = seeded_pool().await;
        let svc = service(&pool);

        let mut dto = create_dto("Atelier Photo");
        dto.images = vec![
            "https://img.mg/3.jpg".to_string(),
            "https://img.mg/1.jpg".to_string(),
            "https://img.mg/2.jpg".to_string(),
        ];
        dto.hours = Some(serde_json::json!({"Lundi": "9h-17h"}));
        let created = svc.create(3, dto).await.unwrap();

        let detail = svc.detail(&created.slug).await.unwrap();
        assert_eq!(
            detail.listing.images,
            vec![
                "https://img.mg/3.jpg".to_string(),
                "https://img.mg/1.jpg".to_string(),
                "https://img.mg/2.jpg".to_string(),
            ]
        );
        assert_eq!(
            detail.listing.hours,
            Some(serde_json::json!({"Lundi": "9h-17h"}))
        );
    }

    #[tokio::test]
    async fn create_with_dangling_reference_is_validation_error() {
        let pool = seeded_pool().await;
        let mut dto = create_dto("Garage Fantôme");
        dto.category_id = 999;
        let err = service(&pool).create(3, dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
