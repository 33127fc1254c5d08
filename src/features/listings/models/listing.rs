use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Listing lifecycle state stored as text.
///
/// Every listing starts as `pending`; moderation moves it to `published` or
/// `rejected`, both terminal. There is no path back to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Published,
    Rejected,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Pending => write!(f, "pending"),
            ListingStatus::Published => write!(f, "published"),
            ListingStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A business listing as seen by services and clients.
///
/// `images` and `hours` are stored as serialized text blobs; the repository
/// decodes them so nothing above it handles raw JSON strings. The joined
/// `*_name` fields are present only on queries that fetch them.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Listing {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub city_id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    /// Ordered sequence of image references.
    pub images: Vec<String>,
    /// Opening hours, day label to time-range string.
    pub hours: Option<serde_json::Value>,
    pub is_featured: bool,
    pub is_verified: bool,
    pub status: ListingStatus,
    pub views: i64,
    pub created_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// Data for inserting a new listing row.
///
/// Status, views and the featured/verified flags are not here on purpose:
/// new listings always start pending, unviewed and unflagged.
#[derive(Debug)]
pub struct NewListing {
    pub user_id: i64,
    pub category_id: i64,
    pub city_id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub images: Vec<String>,
    pub hours: Option<serde_json::Value>,
}
