use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{ModerationQueueQuery, StatsDto, UpdateListingStatusDto};
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::listings::models::Listing;

/// Aggregate counts for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregate counts", body = StatsDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "admin",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn get_stats(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<StatsDto>> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Moderation queue
#[utoipa::path(
    get,
    path = "/api/admin/listings",
    params(ModerationQueueQuery),
    responses(
        (status = 200, description = "Listings awaiting moderation", body = Vec<Listing>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "admin",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn list_moderation_queue(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<ModerationQueueQuery>,
) -> Result<Json<Vec<Listing>>> {
    let listings = service.moderation_queue(query.status).await?;
    Ok(Json(listings))
}

/// Publish or reject a pending listing
#[utoipa::path(
    patch,
    path = "/api/admin/listings/{id}/status",
    params(
        ("id" = i64, Path, description = "Listing id")
    ),
    request_body = UpdateListingStatusDto,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Invalid target status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Unknown listing")
    ),
    tag = "admin",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_listing_status(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateListingStatusDto>,
) -> Result<Json<serde_json::Value>> {
    service.set_listing_status(id, dto.status).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
