use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::listings::dtos::{
    CreateListingDto, CreatedListingDto, ListingDetailDto, ListingSearchQuery,
};
use crate::features::listings::models::Listing;
use crate::features::listings::services::ListingService;
use validator::Validate;

/// Search published listings
///
/// Filters are optional and compose independently; unpublished listings are
/// never returned.
#[utoipa::path(
    get,
    path = "/api/listings",
    params(ListingSearchQuery),
    responses(
        (status = 200, description = "Matching published listings", body = Vec<Listing>),
    ),
    tag = "listings"
)]
pub async fn search_listings(
    State(service): State<Arc<ListingService>>,
    Query(query): Query<ListingSearchQuery>,
) -> Result<Json<Vec<Listing>>> {
    let listings = service.search(query).await?;
    Ok(Json(listings))
}

/// Listing detail with reviews
///
/// Not status-gated; every fetch increments the listing's view counter.
#[utoipa::path(
    get,
    path = "/api/listings/{slug}",
    params(
        ("slug" = String, Path, description = "Listing slug")
    ),
    responses(
        (status = 200, description = "Listing detail", body = ListingDetailDto),
        (status = 404, description = "Unknown slug")
    ),
    tag = "listings"
)]
pub async fn get_listing(
    State(service): State<Arc<ListingService>>,
    Path(slug): Path<String>,
) -> Result<Json<ListingDetailDto>> {
    let detail = service.detail(&slug).await?;
    Ok(Json(detail))
}

/// The caller's own listings, any status
#[utoipa::path(
    get,
    path = "/api/my-listings",
    responses(
        (status = 200, description = "Caller's listings", body = Vec<Listing>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "listings",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn my_listings(
    user: AuthenticatedUser,
    State(service): State<Arc<ListingService>>,
) -> Result<Json<Vec<Listing>>> {
    let listings = service.my_listings(user.id).await?;
    Ok(Json(listings))
}

/// Create a listing
///
/// Any authenticated role may create; the listing starts pending moderation.
#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = CreateListingDto,
    responses(
        (status = 200, description = "Listing created", body = CreatedListingDto),
        (status = 400, description = "Validation or constraint error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "listings",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create_listing(
    user: AuthenticatedUser,
    State(service): State<Arc<ListingService>>,
    AppJson(dto): AppJson<CreateListingDto>,
) -> Result<Json<CreatedListingDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(user.id, dto).await?;
    Ok(Json(created))
}
