use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::features::listings::models::{Listing, ListingStatus, NewListing};

/// Resolved search filters; empty strings have already been normalized away
/// by the service layer.
#[derive(Debug, Clone, Default)]
pub struct ListingSearchFilters {
    pub category: Option<String>,
    pub city: Option<i64>,
    pub search: Option<String>,
    pub featured: bool,
}

/// Store operations for listing rows.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Published listings matching the filters, newest first, joined with
    /// category and city names.
    async fn search_published(&self, filters: &ListingSearchFilters) -> Result<Vec<Listing>>;
    /// Listing by slug regardless of status, joined with category, city and
    /// owner names.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Listing>>;
    /// Count one view. Lost updates under concurrent fetches are acceptable.
    async fn increment_views(&self, id: i64) -> Result<()>;
    /// All listings owned by a user, any status.
    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Listing>>;
    /// Insert a new listing (status defaults to pending) and return its id.
    async fn insert(&self, new_listing: &NewListing) -> Result<i64>;
    /// Listings in a given status, newest first, joined with category, city
    /// and owner names (moderation queue).
    async fn list_by_status(&self, status: ListingStatus) -> Result<Vec<Listing>>;
    /// Set a listing's status; returns the number of affected rows.
    async fn set_status(&self, id: i64, status: ListingStatus) -> Result<u64>;
    /// Total number of listings.
    async fn count(&self) -> Result<i64>;
    /// Number of listings in a given status.
    async fn count_by_status(&self, status: ListingStatus) -> Result<i64>;
    /// Sum of all view counters; `None` when there are no listings.
    async fn sum_views(&self) -> Result<Option<i64>>;
}

/// Raw listing row. `images`/`hours` are serialized text here; decoding into
/// typed values happens in this module only. The joined name columns default
/// to `None` for queries that do not select them.
#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    user_id: i64,
    category_id: i64,
    city_id: i64,
    title: String,
    slug: String,
    description: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    whatsapp: Option<String>,
    email: Option<String>,
    website: Option<String>,
    logo: Option<String>,
    images: Option<String>,
    hours: Option<String>,
    is_featured: bool,
    is_verified: bool,
    status: ListingStatus,
    views: i64,
    created_at: NaiveDateTime,
    #[sqlx(default)]
    category_name: Option<String>,
    #[sqlx(default)]
    city_name: Option<String>,
    #[sqlx(default)]
    owner_name: Option<String>,
}

fn decode_images(listing_id: i64, raw: Option<String>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(listing_id, "Undecodable images blob: {}", e);
            Vec::new()
        }),
    }
}

fn decode_hours(listing_id: i64, raw: Option<String>) -> Option<serde_json::Value> {
    let text = raw?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(listing_id, "Undecodable hours blob: {}", e);
            None
        }
    }
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        let images = decode_images(row.id, row.images);
        let hours = decode_hours(row.id, row.hours);
        Listing {
            id: row.id,
            user_id: row.user_id,
            category_id: row.category_id,
            city_id: row.city_id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            address: row.address,
            phone: row.phone,
            whatsapp: row.whatsapp,
            email: row.email,
            website: row.website,
            logo: row.logo,
            images,
            hours,
            is_featured: row.is_featured,
            is_verified: row.is_verified,
            status: row.status,
            views: row.views,
            created_at: row.created_at,
            category_name: row.category_name,
            city_name: row.city_name,
            owner_name: row.owner_name,
        }
    }
}

pub struct SqliteListingRepository {
    pool: SqlitePool,
}

impl SqliteListingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for SqliteListingRepository {
    async fn search_published(&self, filters: &ListingSearchFilters) -> Result<Vec<Listing>> {
        // Filters compose onto the base predicate; bind order must mirror the
        // order conditions are appended in.
        let mut sql = String::from(
            r#"
            SELECT listings.*, categories.name AS category_name, cities.name AS city_name
            FROM listings
            JOIN categories ON listings.category_id = categories.id
            JOIN cities ON listings.city_id = cities.id
            WHERE listings.status = 'published'
            "#,
        );

        if filters.category.is_some() {
            sql.push_str(" AND categories.slug = ?");
        }
        if filters.city.is_some() {
            sql.push_str(" AND cities.id = ?");
        }
        if filters.search.is_some() {
            sql.push_str(
                " AND (LOWER(listings.title) LIKE ? OR LOWER(listings.description) LIKE ?)",
            );
        }
        if filters.featured {
            sql.push_str(" AND listings.is_featured = 1");
        }

        sql.push_str(" ORDER BY listings.created_at DESC, listings.id DESC");

        let mut query = sqlx::query_as::<_, ListingRow>(&sql);
        if let Some(category) = &filters.category {
            query = query.bind(category);
        }
        if let Some(city) = filters.city {
            query = query.bind(city);
        }
        if let Some(search) = &filters.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.bind(pattern.clone()).bind(pattern);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to search listings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT listings.*, categories.name AS category_name, cities.name AS city_name,
                   users.name AS owner_name
            FROM listings
            JOIN categories ON listings.category_id = categories.id
            JOIN cities ON listings.city_id = cities.id
            JOIN users ON listings.user_id = users.id
            WHERE listings.slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch listing by slug: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.map(Into::into))
    }

    async fn increment_views(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE listings SET views = views + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to increment views: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(
            "SELECT listings.* FROM listings WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list owned listings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_listing: &NewListing) -> Result<i64> {
        let images = if new_listing.images.is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(&new_listing.images)
                    .map_err(|e| AppError::Internal(format!("Failed to encode images: {}", e)))?,
            )
        };
        let hours = new_listing
            .hours
            .as_ref()
            .map(|h| {
                serde_json::to_string(h)
                    .map_err(|e| AppError::Internal(format!("Failed to encode hours: {}", e)))
            })
            .transpose()?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO listings (user_id, category_id, city_id, title, slug, description,
                                  address, phone, whatsapp, email, website, logo, images, hours)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(new_listing.user_id)
        .bind(new_listing.category_id)
        .bind(new_listing.city_id)
        .bind(&new_listing.title)
        .bind(&new_listing.slug)
        .bind(&new_listing.description)
        .bind(&new_listing.address)
        .bind(&new_listing.phone)
        .bind(&new_listing.whatsapp)
        .bind(&new_listing.email)
        .bind(&new_listing.website)
        .bind(&new_listing.logo)
        .bind(images)
        .bind(hours)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Slug uniqueness or a dangling category/city id; surfaced to the
            // caller as a 400 with the store's message.
            let constraint = e.as_database_error().and_then(|db| {
                (db.is_unique_violation() || db.is_foreign_key_violation())
                    .then(|| db.message().to_string())
            });
            match constraint {
                Some(message) => AppError::Validation(message),
                None => {
                    tracing::error!("Failed to insert listing: {:?}", e);
                    AppError::Database(e)
                }
            }
        })?;

        Ok(id)
    }

    async fn list_by_status(&self, status: ListingStatus) -> Result<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT listings.*, categories.name AS category_name, cities.name AS city_name,
                   users.name AS owner_name
            FROM listings
            JOIN categories ON listings.category_id = categories.id
            JOIN cities ON listings.city_id = cities.id
            JOIN users ON listings.user_id = users.id
            WHERE listings.status = ?
            ORDER BY listings.created_at DESC, listings.id DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list listings by status: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn set_status(&self, id: i64, status: ListingStatus) -> Result<u64> {
        let result = sqlx::query("UPDATE listings SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update listing status: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count listings: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(count)
    }

    async fn count_by_status(&self, status: ListingStatus) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count listings by status: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(count)
    }

    async fn sum_views(&self) -> Result<Option<i64>> {
        let sum: Option<i64> = sqlx::query_scalar("SELECT SUM(views) FROM listings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to sum views: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(sum)
    }
}
