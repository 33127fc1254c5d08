use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::listings::models::{Listing, Review};

/// Query params for the published-listing search. All filters are optional
/// and compose independently.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListingSearchQuery {
    /// Category slug, exact match.
    pub category: Option<String>,
    /// City id, exact match.
    pub city: Option<i64>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    /// The featured filter applies only when this is the literal "true".
    pub featured: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateListingDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub category_id: i64,

    pub city_id: i64,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub address: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,

    /// Ordered image references; stored and returned in the same order.
    #[serde(default)]
    pub images: Vec<String>,

    /// Opening hours, day label to time-range string.
    pub hours: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedListingDto {
    pub id: i64,
    pub slug: String,
}

/// Detail response: the listing flattened, plus its reviews newest-first.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDetailDto {
    #[serde(flatten)]
    pub listing: Listing,
    pub reviews: Vec<Review>,
}
